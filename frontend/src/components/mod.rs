pub mod header;
pub mod prediction_form;
pub mod results;
pub mod star_analysis;
pub mod utils;
