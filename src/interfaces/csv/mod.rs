pub mod report_writer;
pub mod step_reader;
