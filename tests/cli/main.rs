mod books_cli;
