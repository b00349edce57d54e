pub mod collect_configured;
pub mod collect_library;
pub mod dispatch;

pub use collect_configured::CollectConfiguredResolversUseCase;
pub use collect_library::{entries_from_state, CollectLibraryResolversUseCase};
pub use dispatch::DispatchResolversUseCase;
