pub mod org_chart;
