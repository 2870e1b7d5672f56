use actiongen_types::{SubactionPath, UserPath};
use itertools::Itertools;

use super::{if_succeeded, Names};
use crate::{
    openxr::{self, ActionState},
    topology::{ActionSetTopology, ActionTopology},
    writer::CodeWriter,
};

pub(super) fn write(writer: &mut CodeWriter, topology: &ActionSetTopology, names: Names) {
    let action_set = topology.action_set;
    let action_set_struct = names.action_set_struct(action_set);

    //Inputs tracked per subaction path, the ones SubactionStates points into
    let per_subaction = topology
        .input_actions()
        .filter(|action| action.action.use_subaction_paths)
        .collect::<Vec<_>>();
    let has_subaction_states =
        !per_subaction.is_empty() && !topology.used_subaction_paths.is_empty();

    writer.blank_line();
    writer.declaration(
        format!("struct {}", names.action_states_struct(action_set)),
        |w| {
            if has_subaction_states {
                write_subaction_states_struct(w, &per_subaction, names);
                w.blank_line();
            }

            write_update(w, topology, &action_set_struct, names);

            if has_subaction_states {
                w.blank_line();
                write_get_subaction_states(w, topology, &per_subaction, &action_set_struct, names);
            }

            w.blank_line_if(input_states(topology).next().is_some());
            for (action, state) in input_states(topology) {
                for &subaction_path in &action.variants {
                    w.line(format!(
                        "{} {}{{{}}};",
                        state.struct_name,
                        names.action_state(&action.action.name, subaction_path),
                        state.structure_type
                    ));
                }
            }
        },
    );
}

/// Input actions along with how their state is fetched
fn input_states<'t, 'a>(
    topology: &'t ActionSetTopology<'a>,
) -> impl Iterator<Item = (&'t ActionTopology<'a>, ActionState)> {
    topology.actions.iter().filter_map(|action| {
        openxr::action_state(action.action.action_type).map(|state| (action, state))
    })
}

fn write_subaction_states_struct(
    writer: &mut CodeWriter,
    per_subaction: &[&ActionTopology],
    names: Names,
) {
    writer.declaration("struct SubactionStates", |w| {
        w.line(format!(
            "XrPath {} = XR_NULL_PATH;",
            names.subaction_states_path()
        ));
        for action in per_subaction {
            if let Some(state) = openxr::action_state(action.action.action_type) {
                w.line(format!(
                    "const {}* {} = nullptr;",
                    state.struct_name,
                    names.action_state_ref(&action.action.name)
                ));
            }
        }
    });
}

fn write_update(
    writer: &mut CodeWriter,
    topology: &ActionSetTopology,
    action_set_struct: &str,
    names: Names,
) {
    writer.block(
        format!("XrResult UpdateActionStates(XrSession session, {action_set_struct} const& actionSet)"),
        |w| {
            w.line("XrActionStateGetInfo actionStateGetInfo{XR_TYPE_ACTION_STATE_GET_INFO};");
            w.line("XrResult result = XR_SUCCESS;");

            for (action, state) in input_states(topology) {
                for &subaction_path in &action.variants {
                    w.blank_line();
                    if_succeeded(w, |w| {
                        w.line(format!(
                            "actionStateGetInfo.action = actionSet.{};",
                            names.action_handle(&action.action.name)
                        ));
                        w.line(match subaction_path {
                            SubactionPath::Null => {
                                "actionStateGetInfo.subactionPath = XR_NULL_PATH;".to_owned()
                            }
                            SubactionPath::User(user_path) => format!(
                                "actionStateGetInfo.subactionPath = actionSet.{};",
                                names.subaction_path(user_path)
                            ),
                        });
                        w.line(format!(
                            "result = {}(session, &actionStateGetInfo, &{});",
                            state.getter,
                            names.action_state(&action.action.name, subaction_path)
                        ));
                    });
                }
            }

            w.line("return result;");
        },
    );
}

fn write_get_subaction_states(
    writer: &mut CodeWriter,
    topology: &ActionSetTopology,
    per_subaction: &[&ActionTopology],
    action_set_struct: &str,
    names: Names,
) {
    writer.block(
        format!(
            "SubactionStates GetSubactionStates({action_set_struct} const& actionSet, XrPath subactionPath) const"
        ),
        |w| {
            for (index, &user_path) in topology.used_subaction_paths.iter().enumerate() {
                let keyword = if index == 0 { "if" } else { "else if" };
                w.block(
                    format!(
                        "{keyword} (subactionPath == actionSet.{})",
                        names.subaction_path(user_path)
                    ),
                    |w| {
                        w.line(format!(
                            "return {{subactionPath, {}}};",
                            state_refs(per_subaction, user_path, names)
                        ));
                    },
                );
            }
            w.block("else", |w| {
                w.line("return {}; // Unknown subaction path.");
            });
        },
    );
}

fn state_refs(per_subaction: &[&ActionTopology], user_path: UserPath, names: Names) -> String {
    per_subaction
        .iter()
        .map(|action| {
            let subaction_path = SubactionPath::User(user_path);
            if action.variants.contains(&subaction_path) {
                format!("&{}", names.action_state(&action.action.name, subaction_path))
            } else {
                "nullptr".to_owned()
            }
        })
        .join(", ")
}
