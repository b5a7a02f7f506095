pub mod math;
pub mod oracle;
