use crate::store::ClickStore;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClickStore>,
    pub audio_path: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn ClickStore>, audio_path: PathBuf) -> Self {
        Self { store, audio_path }
    }
}
