pub mod a001_csv_session;
