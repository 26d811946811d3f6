use crate::core::{
    command_init::OpenCommandInit,
    config::Settings,
    editor::open_in_editor,
    error::{ProjectNavigatorError, Result},
    print_error, print_error_with_structured_usage, print_success,
    state::FolderRecord,
};

pub fn execute_open(indices_args: Vec<String>) -> Result<()> {
    let context = match OpenCommandInit::initialize(indices_args) {
        Ok(context) => context,
        Err(ProjectNavigatorError::NoIndicesProvided) => {
            print_error_with_structured_usage(
                "No folder indices provided",
                &["project-navigator open <index>..."],
                &[("<index>", "Row numbers from 'list', e.g. 1 3-5,8")],
            );
            return Err(ProjectNavigatorError::NoIndicesProvided);
        }
        Err(e) => return Err(e),
    };

    let settings = Settings::load_or_create()?;
    let folders = context.selected_folders();
    let opened = folders
        .iter()
        .filter(|folder| open_folder(&settings, folder))
        .count();

    log::debug!("Opened {opened} of {} selected folders", folders.len());
    Ok(())
}

/// Launch the editor for one folder, reporting the outcome to the user
fn open_folder(settings: &Settings, folder: &FolderRecord) -> bool {
    if !folder.path.is_dir() {
        print_error(&format!(
            "Folder no longer exists: {} (run 'list --refresh')",
            folder.path.display()
        ));
        return false;
    }

    match open_in_editor(settings, &folder.path, folder.language) {
        Ok(()) => {
            print_success(&format!("Opened {}", folder.path.display()));
            true
        }
        Err(e) => {
            log::warn!("Editor launch failed for '{}': {e}", folder.path.display());
            print_error(&e.to_string());
            false
        }
    }
}
