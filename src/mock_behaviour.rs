//! Failure injection for [`LocalStore`](crate::store::LocalStore), so that tests can simulate an unreachable server

use std::error::Error;

use crate::store::StoreRequest;

/// How many requests of each kind succeed, then fail, before the store behaves normally again.
///
/// Each budget is `(successes, failures)`: `(2, 1)` lets two requests through, fails the third one, and allows every later one
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    pub get_tasks_behaviour: (u32, u32),
    pub add_task_behaviour: (u32, u32),
    pub update_task_status_behaviour: (u32, u32),
    pub delete_task_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n_fails` requests of every kind fail
    pub fn fail_now(n_fails: u32) -> Self {
        let budget = (0, n_fails);
        Self {
            get_tasks_behaviour: budget,
            add_task_behaviour: budget,
            update_task_status_behaviour: budget,
            delete_task_behaviour: budget,
        }
    }

    /// Decide whether `request` goes through, and consume one step of its budget
    pub fn allow(&mut self, request: &StoreRequest) -> Result<(), Box<dyn Error>> {
        let (budget, kind) = match request {
            StoreRequest::GetTasks(..) => (&mut self.get_tasks_behaviour, "GET"),
            StoreRequest::AddTask(..) => (&mut self.add_task_behaviour, "POST"),
            StoreRequest::UpdateTaskStatus(..) => (&mut self.update_task_status_behaviour, "PUT"),
            StoreRequest::DeleteTask(..) => (&mut self.delete_task_behaviour, "DELETE"),
        };

        match budget {
            (0, 0) => Ok(()),
            (0, failures) => {
                *failures -= 1;
                log::debug!("Mocked failure of a {} ({} more to come)", kind, failures);
                Err(format!("Mocked {} failure", kind).into())
            },
            (successes, _) => {
                *successes -= 1;
                Ok(())
            },
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use crate::date::CalendarDate;

    #[test]
    fn budgets_are_per_request_kind() {
        let day: CalendarDate = "2024-03-20".parse().unwrap();
        let get = StoreRequest::GetTasks(day);
        let add = StoreRequest::AddTask(day, "X".to_string());
        let delete = StoreRequest::DeleteTask(day, 1);

        let mut default = MockBehaviour::new();
        for _ in 0..5 {
            assert!(default.allow(&get).is_ok());
            assert!(default.allow(&delete).is_ok());
        }

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.allow(&get).is_err());
        assert!(now.allow(&add).is_err());
        assert!(now.allow(&add).is_err());
        assert!(now.allow(&get).is_err());
        assert!(now.allow(&get).is_ok());
        assert!(now.allow(&add).is_ok());

        let mut custom = MockBehaviour {
            delete_task_behaviour: (1, 2),
            ..MockBehaviour::default()
        };
        assert!(custom.allow(&delete).is_ok());
        assert!(custom.allow(&delete).is_err());
        assert!(custom.allow(&get).is_ok());
        assert!(custom.allow(&delete).is_err());
        assert!(custom.allow(&delete).is_ok());
        assert!(custom.allow(&StoreRequest::UpdateTaskStatus(day, 1, true)).is_ok());
    }
}
