//! Built-in demonstration scenario
//!
//! Seeds a manager with the sample data set (three users, three projects,
//! six tasks), walks it through assignments and status changes, and
//! prints the reports: tasks by status, per user, per project, and the
//! tasks past their due date right now.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};

use super::output::Output;
use crate::domain::{TaskManager, TaskStatus};

/// Runs the demo scenario and prints its reports
pub fn run(output: &Output) -> Result<()> {
    let mut manager = TaskManager::new();

    let michael = manager.create_user("Михаил", "michael@gmail.com").id;
    let alice = manager.create_user("Алиса", "alice@gmail.com").id;
    let daniel = manager.create_user("Даниил", "daniel@gmail.com").id;

    let redesign = manager.create_project("Редизайн сайта").id;
    let mobile_app = manager.create_project("Разработка приложения").id;
    let website = manager.create_project("Разработка сайта").id;

    // Due dates are relative to the current run so the mix of overdue and
    // upcoming tasks stays the same whenever the demo executes.
    let now = Utc::now();
    let logo = manager
        .create_task(
            redesign,
            "Переработка лого",
            "Создание нового логотипа по требованиям заказчика.",
            now - Duration::days(5),
        )?
        .id;
    let palette = manager
        .create_task(
            redesign,
            "Изменение палитры сайта",
            "Сверка цветов с заказчиком. Реализация.",
            now + Duration::days(10),
        )?
        .id;
    let app_design = manager
        .create_task(
            mobile_app,
            "Разработка дизайна приложения",
            "Создание макета в Figma.",
            now + Duration::days(62),
        )?
        .id;
    let mockup = manager
        .create_task(
            website,
            "Создание макета",
            "Набросать идеи. Реализовать, согласовав с заказчиком",
            now - Duration::days(2),
        )?
        .id;
    let markup = manager
        .create_task(
            website,
            "Верстка сайта",
            "Согласно макету, сверстать сайт.",
            now + Duration::days(4),
        )?
        .id;
    let review = manager
        .create_task(
            website,
            "Обсуждение с заказчиком",
            "Корректировка требований заказчика.",
            now + Duration::days(12),
        )?
        .id;

    manager.assign_task(logo, michael)?;
    manager.assign_task(palette, alice)?;
    manager.assign_task(app_design, michael)?;
    manager.assign_task(mockup, michael)?;
    manager.assign_task(markup, daniel)?;
    manager.assign_task(review, alice)?;

    manager
        .task_mut(logo)
        .context("seeded task disappeared")?
        .mark_completed();
    manager
        .task_mut(mockup)
        .context("seeded task disappeared")?
        .mark_in_progress();
    manager
        .task_mut(palette)
        .context("seeded task disappeared")?
        .mark_in_progress();

    output.verbose_ctx(
        "demo",
        &format!(
            "Seeded {} users, {} projects",
            manager.users().len(),
            manager.projects().len()
        ),
    );

    if output.is_json() {
        let report = serde_json::json!({
            "by_status": {
                "to_do": manager.tasks_by_status(TaskStatus::ToDo),
                "in_progress": manager.tasks_by_status(TaskStatus::InProgress),
                "completed": manager.tasks_by_status(TaskStatus::Completed),
                "overdue": manager.tasks_by_status(TaskStatus::Overdue),
            },
            "by_user": manager
                .users()
                .iter()
                .map(|user| {
                    serde_json::json!({
                        "user": user,
                        "tasks": manager.tasks_assigned_to(user.id),
                    })
                })
                .collect::<Vec<_>>(),
            "by_project": manager.projects(),
            "overdue_now": manager.overdue_tasks(),
        });
        output.data(&report);
        return Ok(());
    }

    let sections = [
        ("ToDo", TaskStatus::ToDo),
        ("In Progress", TaskStatus::InProgress),
        ("Completed", TaskStatus::Completed),
        ("Overdue", TaskStatus::Overdue),
    ];
    for (i, (label, status)) in sections.into_iter().enumerate() {
        if i > 0 {
            output.blank();
        }
        println!("Задачи со статусом '{}':", label);
        for task in manager.tasks_by_status(status) {
            println!("{}", manager.summary(task));
        }
    }

    for (i, user) in manager.users().iter().enumerate() {
        output.blank();
        println!("Задачи, назначенные user{}:", i + 1);
        for task in manager.tasks_assigned_to(user.id) {
            println!("{}", manager.summary(task));
        }
    }

    for (i, project) in manager.projects().iter().enumerate() {
        output.blank();
        println!("Задачи для проекта project{}:", i + 1);
        for task in manager.tasks_for_project(project.id)? {
            println!("{}", manager.summary(task));
        }
    }

    output.blank();
    println!("Просроченные задачи:");
    for task in manager.overdue_tasks() {
        println!("{}", manager.summary(task));
    }

    Ok(())
}
