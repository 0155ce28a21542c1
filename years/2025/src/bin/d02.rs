lib::entry!(input = "d02.txt", y2025::d02::solve);
