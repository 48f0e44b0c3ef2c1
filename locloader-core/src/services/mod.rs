pub mod curator;
pub mod encoding;
pub mod exporter;
pub mod files;
pub mod importer;
pub mod reload;
