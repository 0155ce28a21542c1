lib::entry!(input = "d01.txt", y2025::d01::solve);
