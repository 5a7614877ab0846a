//! This module provides a client to connect to a REST task store

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::date::CalendarDate;
use crate::task::{Task, TaskId};
use crate::traits::TaskStore;

/// Every endpoint of the task store lives below this path
static API_PATH: &str = "api/calendar";

#[derive(Serialize)]
struct NewTaskBody<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct StatusBody {
    completed: bool,
}


/// A task store that is reached over HTTP
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let mut url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a base URL", url).into());
        }
        // Make sure joined paths are appended, and do not replace the last segment
        if url.path().ends_with('/') == false {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            url,
            http: reqwest::Client::new(),
        })
    }

    /// The base URL of this task store
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `{base}/api/calendar/{date}`
    pub fn day_url(&self, date: &CalendarDate) -> Result<Url, Box<dyn Error>> {
        Ok(self.url.join(&format!("{}/{}", API_PATH, date))?)
    }

    /// `{base}/api/calendar/{date}/{task_id}`
    pub fn task_url(&self, date: &CalendarDate, task_id: TaskId) -> Result<Url, Box<dyn Error>> {
        Ok(self.url.join(&format!("{}/{}/{}", API_PATH, date, task_id))?)
    }

    async fn send_json<B: Serialize>(&self, request: reqwest::RequestBuilder, body: &B) -> Result<(), Box<dyn Error>> {
        let body = serde_json::to_string(body)?;
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        // The status code is not inspected: the next reload will tell what the server actually did
        log::debug!("Task store replied {}", response.status());
        Ok(())
    }
}

/// Parse the body of a `GET /api/calendar/{date}` reply
pub fn parse_tasks(body: &str) -> Result<Vec<Task>, Box<dyn Error>> {
    let tasks = serde_json::from_str(body)
        .map_err(|err| format!("Invalid task list: {}", err))?;
    Ok(tasks)
}

#[async_trait]
impl TaskStore for Client {
    async fn get_tasks(&self, date: &CalendarDate) -> Result<Vec<Task>, Box<dyn Error>> {
        let url = self.day_url(date)?;
        log::debug!("GET {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;
        let text = response.text().await?;
        parse_tasks(&text)
    }

    async fn add_task(&mut self, date: &CalendarDate, description: &str) -> Result<(), Box<dyn Error>> {
        let url = self.day_url(date)?;
        log::debug!("POST {}", url);
        self.send_json(self.http.post(url), &NewTaskBody { description }).await
    }

    async fn update_task_status(&mut self, date: &CalendarDate, task_id: TaskId, completed: bool) -> Result<(), Box<dyn Error>> {
        let url = self.task_url(date, task_id)?;
        log::debug!("PUT {}", url);
        self.send_json(self.http.put(url), &StatusBody { completed }).await
    }

    async fn delete_task(&mut self, date: &CalendarDate, task_id: TaskId) -> Result<(), Box<dyn Error>> {
        let url = self.task_url(date, task_id)?;
        log::debug!("DELETE {}", url);

        let response = self.http
            .delete(url)
            .send()
            .await?;
        log::debug!("Task store replied {}", response.status());
        Ok(())
    }
}
