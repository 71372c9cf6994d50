#[cfg(test)]
mod tests {
    use crate::catalog::{ActionCatalog, ActionDefinition};
    use crate::export::export;
    use crate::log::MemoryLog;
    use crate::model::{ActionKind, ArgumentKind, ExecType};
    use crate::resources::{ActionInstance, Event, ObjectResource, Project, ResourceRef, ScriptResource};

    fn fixture() -> (Project, ActionCatalog) {
        let mut catalog = ActionCatalog::new();
        let lib = catalog.add_library("main");
        let def = catalog.add_definition(
            lib,
            ActionDefinition {
                id: 101,
                parent_id: -1,
                kind: ActionKind::Normal,
                question: false,
                allow_relative: true,
                exec: ExecType::Function,
                exec_code: "action_move".to_string(),
            },
        );

        let mut object = ObjectResource::new(1, "obj_a");
        object.event_groups[0].events.push(Event {
            sub_id: 0,
            other: ResourceRef::none(),
            actions: vec![
                ActionInstance {
                    def: Some(def),
                    relative: false,
                    negated: false,
                    target: ResourceRef::none(),
                    arguments: Vec::new(),
                },
                // no definition: skipped by the exporter
                ActionInstance {
                    def: None,
                    relative: false,
                    negated: false,
                    target: ResourceRef::none(),
                    arguments: Vec::new(),
                },
            ],
        });

        let mut project = Project::new();
        project.scripts.push(ScriptResource {
            id: 5,
            name: "foo".to_string(),
            code: "x=1".to_string(),
        });
        project.objects.push(object);
        (project, catalog)
    }

    #[test]
    fn declared_counts_match_emitted_arrays() {
        let (project, catalog) = fixture();
        let model = export(&project, &catalog, &MemoryLog::new());

        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["nactions"], 1);
        assert_eq!(json["actions"].as_array().unwrap().len(), 1);
        assert_eq!(json["nscripts"], 1);
        assert_eq!(json["scripts"].as_array().unwrap().len(), 1);
        assert_eq!(json["nobjects"], 1);
        assert_eq!(json["objects"].as_array().unwrap().len(), 1);

        let object = &json["objects"][0];
        assert_eq!(object["nevents"], 1);
        assert_eq!(object["events"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn event_action_count_reflects_the_filtered_list() {
        let (project, catalog) = fixture();
        let model = export(&project, &catalog, &MemoryLog::new());

        let json = serde_json::to_value(&model).unwrap();
        let event = &json["objects"][0]["events"][0];

        // one of the two source actions was unsupported
        assert_eq!(event["nactions"], 1);
        assert_eq!(event["actions"].as_array().unwrap().len(), 1);
        assert_eq!(event["actions"][0]["nargs"], 0);
    }

    #[test]
    fn serialized_field_names_follow_the_consumer_struct() {
        let (project, catalog) = fixture();
        let model = export(&project, &catalog, &MemoryLog::new());

        let json = serde_json::to_value(&model).unwrap();

        for key in ["version", "name", "nactions", "actions", "nscripts", "scripts"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }

        let descriptor = &json["actions"][0];
        for key in ["id", "parent", "kind", "question", "relative", "exec", "code"] {
            assert!(descriptor.get(key).is_some(), "missing key {}", key);
        }

        let object = &json["objects"][0];
        for key in ["id", "name", "sprite", "mask", "parent", "solid", "visible", "persistent", "depth"] {
            assert!(object.get(key).is_some(), "missing key {}", key);
        }

        let event = &json["objects"][0]["events"][0];
        assert!(event.get("main_id").is_some());
        assert!(event.get("sub_id").is_some());

        let action = &event["actions"][0];
        for key in ["type", "relative", "inv", "target", "nargs", "args"] {
            assert!(action.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn vocabulary_enums_serialize_as_declaration_order_integers() {
        assert_eq!(serde_json::to_value(ActionKind::Normal).unwrap(), 0);
        assert_eq!(serde_json::to_value(ActionKind::Code).unwrap(), 7);
        assert_eq!(serde_json::to_value(ActionKind::Label).unwrap(), 10);

        assert_eq!(serde_json::to_value(ExecType::None).unwrap(), 0);
        assert_eq!(serde_json::to_value(ExecType::Code).unwrap(), 2);

        assert_eq!(serde_json::to_value(ArgumentKind::Expr).unwrap(), 0);
        assert_eq!(serde_json::to_value(ArgumentKind::Sprite).unwrap(), 7);
        assert_eq!(serde_json::to_value(ArgumentKind::Timeline).unwrap(), 15);
    }

    #[test]
    fn sentinels_survive_serialization() {
        let mut project = Project::new();
        project.objects.push(ObjectResource::new(7, "obj_lonely"));

        let model = export(&project, &ActionCatalog::new(), &MemoryLog::new());
        let json = serde_json::to_value(&model).unwrap();

        let object = &json["objects"][0];
        assert_eq!(object["sprite"], -1);
        assert_eq!(object["mask"], -1);
        assert_eq!(object["parent"], -100);
    }
}
