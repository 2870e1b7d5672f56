use super::{if_succeeded, Names};
use crate::{openxr::string_literal, topology::ActionSetTopology, writer::CodeWriter};

pub(super) fn write(writer: &mut CodeWriter, topology: &ActionSetTopology, names: Names) {
    let action_set = topology.action_set;
    let profiles = &action_set.suggested_bindings;

    writer.blank_line();
    writer.declaration(
        format!("struct {}", names.suggested_bindings_struct(action_set)),
        |w| {
            write_initialize(w, topology, names);

            w.blank_line();
            w.block("XrResult SuggestInteractionProfileBindings(XrInstance instance)", |w| {
                w.line("XrResult result = XR_SUCCESS;");

                for suggested in profiles {
                    w.blank_line();
                    if_succeeded(w, |w| {
                        w.line("XrInteractionProfileSuggestedBinding interactionSuggestedBindings{XR_TYPE_INTERACTION_PROFILE_SUGGESTED_BINDING};");
                        w.line(format!(
                            "interactionSuggestedBindings.interactionProfile = {};",
                            names.interaction_profile(&suggested.interaction_profile)
                        ));
                        w.line(format!(
                            "interactionSuggestedBindings.suggestedBindings = {};",
                            names.binding_table(&suggested.interaction_profile)
                        ));
                        w.line(format!(
                            "interactionSuggestedBindings.countSuggestedBindings = {};",
                            suggested.binding_count()
                        ));
                        w.line("result = xrSuggestInteractionProfileBindings(instance, &interactionSuggestedBindings);");
                    });
                }

                w.blank_line();
                w.line("return result;");
            });

            w.blank_line();
            for suggested in profiles {
                w.line(format!(
                    "XrPath {};",
                    names.interaction_profile(&suggested.interaction_profile)
                ));
            }

            w.blank_line();
            for suggested in profiles {
                w.line(format!(
                    "XrActionSuggestedBinding {}[{}];",
                    names.binding_table(&suggested.interaction_profile),
                    suggested.binding_count()
                ));
            }
        },
    );
}

fn write_initialize(writer: &mut CodeWriter, topology: &ActionSetTopology, names: Names) {
    let action_set = topology.action_set;

    writer.block(
        format!(
            "XrResult Initialize(XrInstance instance, {} const& actionSet)",
            names.action_set_struct(action_set)
        ),
        |w| {
            w.line("XrResult result = XR_SUCCESS;");
            w.blank_line();

            for suggested in &action_set.suggested_bindings {
                if_succeeded(w, |w| {
                    w.line(format!(
                        "result = xrStringToPath(instance, {}, &{});",
                        string_literal(&suggested.interaction_profile),
                        names.interaction_profile(&suggested.interaction_profile)
                    ));
                });
            }

            w.blank_line();
            for &binding_path in &topology.binding_paths {
                w.line(format!(
                    "XrPath {} = XR_NULL_PATH;",
                    names.binding_path(binding_path)
                ));
            }
            for &binding_path in &topology.binding_paths {
                if_succeeded(w, |w| {
                    w.line(format!(
                        "result = xrStringToPath(instance, {}, &{});",
                        string_literal(binding_path),
                        names.binding_path(binding_path)
                    ));
                });
            }

            w.blank_line();
            if_succeeded(w, |w| {
                for suggested in &action_set.suggested_bindings {
                    let table = names.binding_table(&suggested.interaction_profile);
                    for (index, (action_name, binding_path)) in suggested.pairs().enumerate() {
                        w.line(format!(
                            "{table}[{index}] = {{actionSet.{}, {}}};",
                            names.action_handle(action_name),
                            names.binding_path(binding_path)
                        ));
                    }
                }
            });

            w.blank_line();
            w.line("return result;");
        },
    );
}
