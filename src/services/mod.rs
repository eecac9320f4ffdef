pub mod announcements;
pub mod classes;
pub mod sessions;
pub mod students;
pub mod system;

pub use announcements::AnnouncementService;
pub use classes::ClassService;
pub use sessions::{ClientMeta, SessionService};
pub use students::StudentService;
pub use system::SystemService;

use std::sync::Arc;

use actix_web::web;

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::models::AppStartTime;
use crate::storage::Storage;

/// 全部服务实例，启动时构建一次，各 worker 共享
#[derive(Clone)]
pub struct AppServices {
    pub classes: web::Data<ClassService>,
    pub announcements: web::Data<AnnouncementService>,
    pub sessions: web::Data<SessionService>,
    pub students: web::Data<StudentService>,
    pub system: web::Data<SystemService>,
}

impl AppServices {
    pub fn build(
        storage: Arc<dyn Storage>,
        cache: Arc<dyn ObjectCache>,
        config: &AppConfig,
        start_time: AppStartTime,
    ) -> Self {
        Self {
            classes: web::Data::new(ClassService::new(storage.clone(), config.import.clone())),
            announcements: web::Data::new(AnnouncementService::new(
                storage.clone(),
                config.announcements.clone(),
            )),
            sessions: web::Data::new(SessionService::new(
                storage.clone(),
                cache,
                config.session.clone(),
            )),
            students: web::Data::new(StudentService::new(storage.clone())),
            system: web::Data::new(SystemService::new(storage, config.app.clone(), start_time)),
        }
    }

    /// 把服务注册为 app_data，处理函数通过 `web::Data<XxxService>` 取用
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.classes.clone())
            .app_data(self.announcements.clone())
            .app_data(self.sessions.clone())
            .app_data(self.students.clone())
            .app_data(self.system.clone());
    }
}
