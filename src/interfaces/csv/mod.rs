pub mod entry_reader;
