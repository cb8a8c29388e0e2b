pub mod a001_csv_chat;
