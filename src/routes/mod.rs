pub mod announcements;

pub mod classes;

pub mod sessions;

pub mod students;

pub mod system;

pub use announcements::configure_announcements_routes;
pub use classes::configure_classes_routes;
pub use sessions::configure_sessions_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_classes_routes)
        .configure(configure_announcements_routes)
        .configure(configure_sessions_routes)
        .configure(configure_students_routes)
        .configure(configure_system_routes);
}
