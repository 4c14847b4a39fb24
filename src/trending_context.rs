use dioxus::prelude::*;
use tracing::warn;

use crate::config::Config;
use crate::trending::TrendingStore;

/// Shared handle to the trending store. `None` while the connection is being
/// established, or if it failed; trending features are skipped in that case
/// and the rest of the app keeps working.
#[derive(Clone)]
pub struct TrendingContext {
    pub store: Signal<Option<TrendingStore>>,
}

/// Provider component that opens the trending store in the background.
#[component]
pub fn TrendingContextProvider(config: Config, children: Element) -> Element {
    let mut store = use_signal(|| None::<TrendingStore>);

    let init_config = config.clone();
    use_effect(move || {
        let config = init_config.clone();
        spawn(async move {
            if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
                warn!(
                    "Failed to create data directory {}: {}",
                    config.data_dir.display(),
                    e
                );
                return;
            }
            match TrendingStore::new(&config.database_path().to_string_lossy()).await {
                Ok(opened) => store.set(Some(opened)),
                Err(e) => warn!("Trending store unavailable: {}", e),
            }
        });
    });

    use_context_provider(|| TrendingContext { store });

    rsx! {
        {children}
    }
}

/// Hook to access the trending store from components.
pub fn use_trending_store() -> Signal<Option<TrendingStore>> {
    use_context::<TrendingContext>().store
}
