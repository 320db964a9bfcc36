pub mod alert;
pub mod chart;
pub mod chrome;
pub mod kpi;

pub use alert::{Alert, Level};
pub use chart::ChartCard;
pub use chrome::{Footer, Sidebar, Topbar};
pub use kpi::{KpiCard, KpiRow};
