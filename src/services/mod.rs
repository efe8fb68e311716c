pub mod benefits;
pub mod business_case;
pub mod case_file;
pub mod charts;
pub mod csv_export;
pub mod executive_summary;
pub mod investment;
pub mod number_format;
pub mod roi;
pub mod sensitivity;
pub mod tornado;
