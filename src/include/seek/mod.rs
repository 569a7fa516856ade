pub mod seek_report;
