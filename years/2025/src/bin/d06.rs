lib::entry!(input = "d06.txt", y2025::d06::solve);
