pub mod resolvers;

// Re-export use cases
pub use resolvers::{
    entries_from_state, CollectConfiguredResolversUseCase, CollectLibraryResolversUseCase,
    DispatchResolversUseCase,
};
