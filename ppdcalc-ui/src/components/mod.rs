pub mod numeric_field;
pub mod results_table;
pub mod viewing_diagram;

pub use numeric_field::NumericField;
pub use results_table::ResultsTable;
pub use viewing_diagram::ViewingDiagram;
