pub mod libresolv_reader;
pub mod network_manager_reader;
pub mod nsenter_executor;
pub mod resolv_conf_reader;

pub use libresolv_reader::{read_default_state, LibResolvReader};
pub use network_manager_reader::{collect_dns_values, parse_device_dns_line, NetworkManagerReader};
pub use nsenter_executor::NsenterExecutor;
pub use resolv_conf_reader::{parse_nameserver_line, ResolvConfReader};
