//! A terminal front end for the calendar and its task list.
//!
//! Usage: `calendar-tasks [SERVER_URL]`, or `calendar-tasks --local FILE.json` to work without any server.
//! The server URL can also be set with the `CALENDAR_TASKS_URL` environment variable.

use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;

use calendar_tasks::client::Client;
use calendar_tasks::config;
use calendar_tasks::store::LocalStore;
use calendar_tasks::traits::TaskStore;
use calendar_tasks::view;
use calendar_tasks::{CalendarApp, CalendarDate, TaskId};

const HELP: &str = "Commands:
  prev | next            browse months
  select <YYYY-MM-DD|d>  select a day of the displayed month
  add <text>             add a task to the selected day
  toggle <id>            check or uncheck a task
  delete <id>            delete a task
  reload                 fetch the tasks again
  help | quit";


#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let today = CalendarDate::today();

    match args.as_slice() {
        [flag, path] if flag == "--local" => {
            let path = Path::new(path);
            let store = match LocalStore::from_file(path) {
                Ok(store) => store,
                Err(err) => {
                    log::warn!("Invalid store file: {}. Using an empty store", err);
                    LocalStore::new_with_file(path)
                }
            };
            interact(CalendarApp::new(store, today)?).await
        },
        [] | [_] => {
            if let Some(url) = args.first() {
                config::set(&config::SERVER_URL, url);
            } else if let Ok(url) = std::env::var(config::SERVER_URL_ENV) {
                config::set(&config::SERVER_URL, url);
            }
            let url = config::get(&config::SERVER_URL);
            log::info!("Using the task store at {}", url);
            let client = Client::new(&url)?;
            interact(CalendarApp::new(client, today)?).await
        },
        _ => Err(format!("Unexpected arguments {:?}\nUsage: calendar-tasks [SERVER_URL] | calendar-tasks --local FILE.json", args).into()),
    }
}

fn display<S: TaskStore>(app: &CalendarApp<S>) {
    println!();
    print!("{}", view::render_grid_text(app.grid()));
    println!("Tasks for {}", app.selected_date());
    print!("{}", view::render_list_text(&app.panel().rows()));
}

fn ask(question: &str) -> bool {
    print!("{} [y/N] ", question);
    let _ = stdout().flush();
    let mut answer = String::new();
    if stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn parse_day<S: TaskStore>(app: &CalendarApp<S>, arg: &str) -> Result<CalendarDate, Box<dyn Error>> {
    if let Ok(day) = arg.parse::<u32>() {
        return CalendarDate::from_parts(app.view().year(), app.view().month(), day);
    }
    arg.parse()
}

fn parse_id(arg: &str) -> Result<TaskId, Box<dyn Error>> {
    arg.parse::<TaskId>()
        .map_err(|err| format!("Invalid task id {:?}: {}", arg, err).into())
}

async fn interact<S: TaskStore>(mut app: CalendarApp<S>) -> Result<(), Box<dyn Error>> {
    app.start().await;
    display(&app);
    println!("{}", HELP);

    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim();
        let (command, arg) = match line.find(' ') {
            None => (line, ""),
            Some(pos) => (&line[..pos], line[pos..].trim()),
        };

        let result: Result<(), Box<dyn Error>> = match command {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "help" => { println!("{}", HELP); continue },
            "prev" => app.prev_month(),
            "next" => app.next_month(),
            "reload" => { app.panel_mut().reload().await; Ok(()) },
            "select" => match parse_day(&app, arg) {
                Ok(date) => app.click_day(&date).await,
                Err(err) => Err(err),
            },
            "add" => {
                app.panel_mut().set_input(arg);
                app.panel_mut().submit_input().await;
                Ok(())
            },
            "toggle" => match parse_id(arg) {
                Ok(id) => {
                    let date = *app.selected_date();
                    let completed = app.panel().rows().iter().any(|row| matches!(row,
                        view::ListRow::Task { id: row_id, completed: true, .. } if *row_id == id));
                    app.panel_mut().update_task_status(&date, id, completed == false).await;
                    Ok(())
                },
                Err(err) => Err(err),
            },
            "delete" => match parse_id(arg) {
                Ok(id) => {
                    let date = *app.selected_date();
                    app.panel_mut().delete_task(&date, id, ask).await;
                    Ok(())
                },
                Err(err) => Err(err),
            },
            other => Err(format!("Unknown command {:?} (try \"help\")", other).into()),
        };

        match result {
            Ok(()) => display(&app),
            Err(err) => println!("{}", err),
        }
    }
}
