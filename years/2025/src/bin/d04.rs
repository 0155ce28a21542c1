lib::entry!(input = "d04.txt", y2025::d04::solve);
