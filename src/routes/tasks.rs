use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{TaskInput, TaskUpdate},
    store::TaskStore,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Parses the `{id}` path segment. Ids are positive integers; anything else is a 400.
fn parse_task_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("Invalid task ID".into())),
    }
}

/// Lists every task.
///
/// Tasks are not scoped per user: every authenticated caller sees the same list,
/// in creation order.
///
/// ## Responses:
/// - `200 OK`: JSON array of tasks (possibly empty).
/// - `401 Unauthorized`: missing or invalid token.
/// - `500 Internal Server Error`: storage failure.
pub async fn get_tasks(tasks: web::Data<TaskStore>) -> Result<impl Responder, AppError> {
    let tasks = tasks.list().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// ## Request Body:
/// - `description`: what needs doing (1 to 1000 characters).
///
/// ## Responses:
/// - `201 Created`: the new task, with `completed: false`.
/// - `400 Bad Request`: malformed body or invalid description.
/// - `401 Unauthorized`: missing or invalid token.
/// - `500 Internal Server Error`: storage failure.
pub async fn create_task(
    tasks: web::Data<TaskStore>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks.create(&task_data.description).await?;
    log::info!("{} created task {}", user.0, task.id);

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a task by id.
///
/// ## Responses:
/// - `200 OK`: the task.
/// - `400 Bad Request`: the id is not a positive integer.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no task with that id.
pub async fn get_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;
    let task = tasks.get(id).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Replaces a task's description and completion flag.
///
/// ## Request Body:
/// - `description`: the new description (1 to 1000 characters).
/// - `completed` (optional, default `false`): the new completion flag.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `400 Bad Request`: bad id or malformed body.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no task with that id.
pub async fn update_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<String>,
    task_data: web::Json<TaskUpdate>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;
    task_data.validate()?;

    let task = tasks
        .update(id, &task_data.description, task_data.completed)
        .await?;
    log::info!("{} updated task {}", user.0, task.id);

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by id.
///
/// ## Responses:
/// - `204 No Content`: deleted.
/// - `400 Bad Request`: the id is not a positive integer.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no task with that id, including one deleted earlier.
pub async fn delete_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;
    tasks.delete(id).await?;
    log::info!("{} deleted task {}", user.0, id);

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("1").unwrap(), 1);
        assert_eq!(parse_task_id("999").unwrap(), 999);

        for raw in ["0", "-3", "abc", "1.5", "", "99999999999999999999"] {
            assert!(
                matches!(parse_task_id(raw), Err(AppError::BadRequest(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
