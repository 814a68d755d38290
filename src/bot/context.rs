use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::City;
use crate::config::Config;
use crate::database::store::RegistrationStore;
use crate::services::content::ContentSource;
use crate::services::reminder::ReminderDispatcher;

pub const HISN_PDF_FILE: &str = "hisn_almuslim.pdf";

/// Everything an update handler needs, cloned into each dptree endpoint.
#[derive(Clone)]
pub struct BotContext {
    pub store: Arc<dyn RegistrationStore>,
    pub content: Arc<dyn ContentSource>,
    pub dispatcher: Arc<ReminderDispatcher>,
    pub assets_dir: PathBuf,
    pub developer_contact: String,
    pub admin_chat_ids: Vec<i64>,
}

impl BotContext {
    pub fn new(
        config: &Config,
        store: Arc<dyn RegistrationStore>,
        content: Arc<dyn ContentSource>,
        dispatcher: Arc<ReminderDispatcher>,
    ) -> Self {
        Self {
            store,
            content,
            dispatcher,
            assets_dir: config.assets_dir.clone(),
            developer_contact: config.developer_contact.clone(),
            admin_chat_ids: config.admin_chat_ids.clone(),
        }
    }

    pub fn city_image(&self, city: City) -> PathBuf {
        self.assets_dir.join("cities").join(city.image_file())
    }

    pub fn hisn_pdf(&self) -> PathBuf {
        self.assets_dir.join(HISN_PDF_FILE)
    }

    pub fn is_admin(&self, chat_id: i64) -> bool {
        self.admin_chat_ids.contains(&chat_id)
    }
}
