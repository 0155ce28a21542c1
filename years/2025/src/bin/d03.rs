lib::entry!(input = "d03.txt", y2025::d03::solve);
