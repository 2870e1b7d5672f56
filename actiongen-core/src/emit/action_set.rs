use actiongen_types::{ActionType, SubactionPath};
use itertools::Itertools;

use super::{if_succeeded, Names};
use crate::{
    openxr::{self, string_literal},
    topology::{ActionSetTopology, ActionTopology},
    writer::CodeWriter,
};

pub(super) fn write(writer: &mut CodeWriter, topology: &ActionSetTopology, names: Names) {
    let action_set = topology.action_set;
    let struct_name = names.action_set_struct(action_set);
    let handle = names.action_set_handle();

    writer.blank_line();
    writer.declaration(format!("struct {struct_name}"), |w| {
        w.block(format!("~{struct_name}()"), |w| {
            w.block(format!("if ({handle} != XR_NULL_HANDLE)"), |w| {
                w.line(format!("(void)xrDestroyActionSet({handle});"));
            });
        });

        w.blank_line();
        write_initialize(w, topology, names);

        for action in &topology.actions {
            if action.action.action_type == ActionType::Pose {
                for &subaction_path in &action.variants {
                    write_action_space_helper(w, action, subaction_path, names);
                }
            }
        }

        w.blank_line();
        w.line(format!("XrActionSet {handle}{{XR_NULL_HANDLE}};"));

        w.blank_line();
        for action in &action_set.actions {
            w.line(format!(
                "XrAction {}{{XR_NULL_HANDLE}};",
                names.action_handle(&action.name)
            ));
        }

        w.blank_line_if(!topology.used_subaction_paths.is_empty());
        for &user_path in &topology.used_subaction_paths {
            w.line(format!(
                "XrPath {}{{XR_NULL_PATH}};",
                names.subaction_path(user_path)
            ));
        }
    });
}

fn write_initialize(writer: &mut CodeWriter, topology: &ActionSetTopology, names: Names) {
    let action_set = topology.action_set;
    let handle = names.action_set_handle();

    writer.block("XrResult Initialize(XrInstance instance)", |w| {
        w.line("XrActionSetCreateInfo actionSetInfo{XR_TYPE_ACTION_SET_CREATE_INFO};");
        w.line(format!(
            "strcpy_s(actionSetInfo.actionSetName, {});",
            string_literal(&action_set.name)
        ));
        w.line(format!(
            "strcpy_s(actionSetInfo.localizedActionSetName, {});",
            string_literal(&action_set.localized_name)
        ));
        w.line(format!("actionSetInfo.priority = {};", action_set.priority));
        w.line(format!(
            "XrResult result = xrCreateActionSet(instance, &actionSetInfo, &{handle});"
        ));

        for &user_path in &topology.used_subaction_paths {
            w.blank_line();
            if_succeeded(w, |w| {
                w.line(format!(
                    "result = xrStringToPath(instance, {}, &{});",
                    string_literal(user_path.path()),
                    names.subaction_path(user_path)
                ));
            });
        }

        for action in &topology.actions {
            w.blank_line();
            if_succeeded(w, |w| write_create_action(w, action, &handle, names));
        }

        w.blank_line();
        w.line("return result;");
    });
}

fn write_create_action(writer: &mut CodeWriter, topology: &ActionTopology, handle: &str, names: Names) {
    let action = topology.action;

    if !topology.user_paths.is_empty() {
        writer.line(format!(
            "const XrPath subactionPaths[] = {{ {} }};",
            topology
                .user_paths
                .iter()
                .map(|&user_path| names.subaction_path(user_path))
                .join(", ")
        ));
    }

    writer.line("XrActionCreateInfo actionCreateInfo{XR_TYPE_ACTION_CREATE_INFO};");
    writer.line(format!(
        "actionCreateInfo.actionType = {};",
        openxr::action_type(action.action_type)
    ));
    writer.line(format!(
        "strcpy_s(actionCreateInfo.actionName, {});",
        string_literal(&action.name)
    ));
    writer.line(format!(
        "strcpy_s(actionCreateInfo.localizedActionName, {});",
        string_literal(&action.localized_name)
    ));

    if !topology.user_paths.is_empty() {
        writer.line(format!(
            "actionCreateInfo.countSubactionPaths = {};",
            topology.user_paths.len()
        ));
        writer.line("actionCreateInfo.subactionPaths = subactionPaths;");
    }

    writer.line(format!(
        "result = xrCreateAction({handle}, &actionCreateInfo, &{});",
        names.action_handle(&action.name)
    ));
}

fn write_action_space_helper(
    writer: &mut CodeWriter,
    topology: &ActionTopology,
    subaction_path: SubactionPath,
    names: Names,
) {
    let action = topology.action;

    writer.blank_line();
    writer.block(
        format!(
            "XrResult {}(XrSession session, XrSpace* space) const",
            names.action_space_helper(&action.name, subaction_path)
        ),
        |w| {
            w.line("XrActionSpaceCreateInfo actionSpaceInfo{XR_TYPE_ACTION_SPACE_CREATE_INFO};");
            w.line(format!(
                "actionSpaceInfo.action = {};",
                names.action_handle(&action.name)
            ));
            w.line("actionSpaceInfo.poseInActionSpace.orientation.w = 1.0f;");
            if let SubactionPath::User(user_path) = subaction_path {
                w.line(format!(
                    "actionSpaceInfo.subactionPath = {};",
                    names.subaction_path(user_path)
                ));
            }
            w.line("return xrCreateActionSpace(session, &actionSpaceInfo, space);");
        },
    );
}
