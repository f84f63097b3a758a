// Resume intake: PDF text extraction and the end-to-end analysis report.

pub mod handlers;
pub mod pdf;
pub mod report;
