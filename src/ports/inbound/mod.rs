/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that hosts (the queue dispatcher,
/// the CLI) use to trigger a license analysis run.
pub mod license_analysis_port;

pub use license_analysis_port::LicenseAnalysisPort;
