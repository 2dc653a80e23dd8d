use tasklog_client::{TaskQuery, ViewMode};

use crate::cli::subcommands::task::FilterArgs;

/// Load command-line filters into `query` and apply them.
pub fn apply(query: &mut TaskQuery, args: &FilterArgs) {
    if args.backdated {
        query.set_mode(ViewMode::Backdated);
    }
    if args.user.is_some() && !query.can_select_user() {
        tracing::warn!("--user ignored: your role only sees its own tasks");
    }

    let pending = query.pending_mut();
    let fields = [
        (&mut pending.project_id, &args.project),
        (&mut pending.user_id, &args.user),
        (&mut pending.created_by, &args.created_by),
        (&mut pending.task_type, &args.task_type),
        (&mut pending.status, &args.status),
        (&mut pending.from_date, &args.from),
        (&mut pending.to_date, &args.to),
        (&mut pending.creator_type, &args.creator),
        (&mut pending.search, &args.search),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
    if args.backdated {
        pending.show_all_backdated = args.all_backdated;
    }

    query.apply_filters();
}
