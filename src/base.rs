pub mod aggregate;
pub mod barchart;
pub mod category;
pub mod cents;
pub mod charset;
pub mod config;
pub mod date;
pub mod expense;
pub mod fs;
pub mod granularity;
pub mod interval;
pub mod percent;
pub mod report;
pub mod store;
pub mod summary;
pub mod tree;
pub mod util;

pub use aggregate::Aggregate;
pub use category::Category;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use expense::Expense;
pub use expense::ExpenseId;
pub use fs::Fs;
pub use granularity::Granularity;
pub use interval::Interval;
pub use percent::Percent;
pub use report::Report;
pub use store::Store;
pub use summary::Period;
pub use summary::PeriodSummary;
pub use tree::Tree;
