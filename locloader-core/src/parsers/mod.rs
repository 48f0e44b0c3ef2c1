pub mod language_csv;
