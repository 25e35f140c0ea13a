//! Robot, task and alert mutators.

use uuid::Uuid;

use super::AppStore;
use crate::domain::alert::NewAlert;
use crate::domain::robot::RobotUpdate;
use crate::domain::task::{NewTask, TaskUpdate};
use crate::error::StoreError;

impl AppStore {
    /// Merges `update` into the robot and stamps its `last_seen`.
    ///
    /// # Errors
    /// Returns [`StoreError::RobotNotFound`] when no robot has `id`.
    pub fn update_robot(&self, id: &str, update: RobotUpdate) -> Result<(), StoreError> {
        let now = self.clock.now_millis();
        let found = self.mutate_entity("update_robot", |state| {
            let robot = state.robots.iter_mut().find(|robot| robot.id == id)?;
            update.apply_to(robot);
            robot.last_seen = now;

            Some(true)
        });

        if found {
            Ok(())
        } else {
            Err(StoreError::RobotNotFound { id: id.to_string() })
        }
    }

    /// Creates a queued task at the front of the task list and returns its id.
    pub fn add_task(&self, new_task: NewTask) -> String {
        let id = format!("task_{}", Uuid::new_v4().simple());
        let task = new_task.into_task(id.clone(), self.clock.now_millis());
        self.mutate("add_task", |state| {
            state.tasks.insert(0, task);

            true
        });

        id
    }

    /// Merges `update` into the task without changing list order.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has `id`.
    pub fn update_task(&self, id: &str, update: TaskUpdate) -> Result<(), StoreError> {
        let found = self.mutate_entity("update_task", |state| {
            let task = state.tasks.iter_mut().find(|task| task.id == id)?;
            let before = task.clone();
            update.apply_to(task);

            Some(*task != before)
        });

        if found {
            Ok(())
        } else {
            Err(StoreError::TaskNotFound { id: id.to_string() })
        }
    }

    /// Marks the alert as acknowledged. Acknowledging twice is a no-op.
    ///
    /// # Errors
    /// Returns [`StoreError::AlertNotFound`] when no alert has `id`.
    pub fn acknowledge_alert(&self, id: &str) -> Result<(), StoreError> {
        let found = self.mutate_entity("acknowledge_alert", |state| {
            let alert = state.alerts.iter_mut().find(|alert| alert.id == id)?;
            let was_acknowledged = std::mem::replace(&mut alert.acknowledged, true);

            Some(!was_acknowledged)
        });

        if found {
            Ok(())
        } else {
            Err(StoreError::AlertNotFound { id: id.to_string() })
        }
    }

    /// Raises an unacknowledged alert at the front of the alert list and
    /// returns its id.
    pub fn add_alert(&self, new_alert: NewAlert) -> String {
        let id = format!("alert_{}", Uuid::new_v4().simple());
        let alert = new_alert.into_alert(id.clone(), self.clock.now_millis());
        self.mutate("add_alert", |state| {
            state.alerts.insert(0, alert);

            true
        });

        id
    }
}
