use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;
use std::sync::Arc;

use crate::database::store::{RegistrationStore, StoreError};
use crate::services::content::ContentSource;
use crate::utils::format::format_reminder;
use crate::utils::logging::{log_fetch_error, log_system_event};

/// Top of every hour.
pub const DEFAULT_REMINDER_SCHEDULE: &str = "0 0 * * * *";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Delivers a reminder to one chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), BoxError>;
}

#[async_trait]
impl Notifier for Bot {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), BoxError> {
        self.send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        Ok(())
    }
}

/// Outcome of one dispatch tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Sends the current prayer times to every registered chat.
pub struct ReminderDispatcher {
    store: Arc<dyn RegistrationStore>,
    content: Arc<dyn ContentSource>,
    notifier: Arc<dyn Notifier>,
}

impl ReminderDispatcher {
    pub fn new(
        store: Arc<dyn RegistrationStore>,
        content: Arc<dyn ContentSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { store, content, notifier }
    }

    /// Runs one tick. Each chat is fetched and notified on its own; a failure
    /// for one chat is logged and the rest still go out.
    pub async fn dispatch(&self) -> Result<DispatchReport, StoreError> {
        let registrations = self.store.list().await?;
        let mut report = DispatchReport::default();

        for (chat_id, city) in registrations {
            report.attempted += 1;

            let times = match self.content.prayer_times(city).await {
                Ok(times) => times,
                Err(e) => {
                    log_fetch_error("reminder", &format!("chat {chat_id} ({city})"), &e.to_string());
                    report.failed += 1;
                    continue;
                }
            };

            match self.notifier.notify(chat_id, &format_reminder(city, &times)).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::error!("Failed to send reminder to chat {}: {}", chat_id, e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Reminder tick finished: {} attempted, {} delivered, {} failed",
            report.attempted, report.delivered, report.failed
        );
        Ok(report)
    }
}

/// Owns the cron scheduler that triggers [`ReminderDispatcher`].
pub struct ReminderService {
    dispatcher: Arc<ReminderDispatcher>,
    scheduler: JobScheduler,
    schedule: String,
    job: Option<Uuid>,
    shut_down: bool,
}

impl ReminderService {
    pub async fn new(dispatcher: Arc<ReminderDispatcher>, schedule: impl Into<String>) -> Result<Self, BoxError> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            dispatcher,
            scheduler,
            schedule: schedule.into(),
            job: None,
            shut_down: false,
        })
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    pub async fn start(&mut self) -> Result<(), BoxError> {
        if self.job.is_some() {
            return Err("reminder service is already running".into());
        }

        // A scheduler cannot be restarted once shut down.
        if self.shut_down {
            self.scheduler = JobScheduler::new().await?;
            self.shut_down = false;
        }

        let dispatcher = self.dispatcher.clone();
        let reminder_job = Job::new_async(self.schedule.as_str(), move |_uuid, _l| {
            let dispatcher = dispatcher.clone();
            Box::pin(async move {
                if let Err(e) = dispatcher.dispatch().await {
                    tracing::error!("Failed to send reminders: {}", e);
                }
            })
        })?;

        let job_id = self.scheduler.add(reminder_job).await?;
        if let Err(e) = self.scheduler.start().await {
            if let Err(remove_err) = self.scheduler.remove(&job_id).await {
                tracing::warn!("Failed to remove reminder job {}: {}", job_id, remove_err);
            }
            return Err(e.into());
        }
        self.job = Some(job_id);

        log_system_event("Reminder service started", Some(&format!("schedule '{}'", self.schedule)));
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), BoxError> {
        if let Some(job_id) = self.job.take() {
            self.scheduler.remove(&job_id).await?;
        }
        if !self.shut_down {
            self.scheduler.shutdown().await?;
            self.shut_down = true;
        }
        log_system_event("Reminder service stopped", None);
        Ok(())
    }

    /// Runs one tick immediately, outside the schedule.
    pub async fn dispatch_now(&self) -> Result<DispatchReport, StoreError> {
        self.dispatcher.dispatch().await
    }
}
