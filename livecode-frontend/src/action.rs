use std::path::PathBuf;

use crate::{
    io,
    model::{Model, PrintContent},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Load(PathBuf),
    Quit,
    Save(PathBuf, Vec<String>),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}

#[tracing::instrument(skip(model))]
pub async fn exec(model: &mut Model, actions: Vec<Action>) -> ActionResult {
    for action in actions {
        match action {
            Action::Load(path) => load(model, path).await,
            Action::Quit => return ActionResult::Quit,
            Action::Save(path, lines) => save(model, path, lines).await,
        }
    }

    ActionResult::Normal
}

async fn load(model: &mut Model, path: PathBuf) {
    match io::load_lines(&path).await {
        Ok(lines) => {
            model.engine.load(lines);
            model.status = Some(PrintContent::Information(format!(
                "\"{}\" loaded",
                path.display()
            )));
            model.path = Some(path);
            model.engine.execute();
        }
        Err(err) => {
            tracing::error!("loading file failed: {:?} {:?}", path, err);
            model.status = Some(PrintContent::Error(format!(
                "loading \"{}\" failed",
                path.display()
            )));
        }
    }
}

async fn save(model: &mut Model, path: PathBuf, lines: Vec<String>) {
    match io::save_lines(&path, &lines).await {
        Ok(()) => {
            model.status = Some(PrintContent::Information(format!(
                "\"{}\" {}L written",
                path.display(),
                lines.len()
            )));
            model.path = Some(path);
        }
        Err(err) => {
            tracing::error!("saving file failed: {:?} {:?}", path, err);
            model.status = Some(PrintContent::Error(format!(
                "saving \"{}\" failed",
                path.display()
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, path::PathBuf, rc::Rc};

    use super::*;

    fn get_temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("livecode-action-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn load_replaces_buffer_and_executes() {
        let path = get_temp_path("load.py");
        std::fs::write(&path, "a = 1\nprint(a)\n").unwrap();

        let runs = Rc::new(RefCell::new(Vec::new()));
        let captured = runs.clone();
        let mut model = Model::default();
        model
            .engine
            .register_executor(move |lines: Vec<String>| captured.borrow_mut().push(lines));

        let result = exec(&mut model, vec![Action::Load(path.clone())]).await;
        let _ = std::fs::remove_file(&path);

        let expected = vec!["a = 1".to_string(), "print(a)".to_string()];
        assert_eq!(ActionResult::Normal, result);
        assert_eq!(expected, model.engine.lines());
        assert_eq!(vec![expected], *runs.borrow());
        assert_eq!(Some(path), model.path);
    }

    #[tokio::test]
    async fn failed_load_keeps_buffer() {
        let path = get_temp_path("missing.py");
        let mut model = Model::default();
        model.engine.insert_char('x');

        exec(&mut model, vec![Action::Load(path)]).await;

        assert_eq!(vec!["x".to_string()], model.engine.lines());
        assert_eq!(None, model.path);
        assert!(matches!(model.status, Some(PrintContent::Error(_))));
    }

    #[tokio::test]
    async fn save_writes_lines_and_remembers_path() {
        let path = get_temp_path("save.py");
        let mut model = Model::default();

        exec(
            &mut model,
            vec![Action::Save(path.clone(), vec!["x".to_string()])],
        )
        .await;
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!("x", content.trim_end());
        assert_eq!(Some(path), model.path);
        assert!(matches!(model.status, Some(PrintContent::Information(_))));
    }

    #[tokio::test]
    async fn quit_stops_remaining_actions() {
        let path = get_temp_path("never.py");
        let mut model = Model::default();

        let result = exec(
            &mut model,
            vec![Action::Quit, Action::Save(path.clone(), Vec::new())],
        )
        .await;

        assert_eq!(ActionResult::Quit, result);
        assert!(!path.exists());
    }
}
