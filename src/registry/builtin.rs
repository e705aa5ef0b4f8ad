use crate::registry::{ComponentDescriptor, ComponentRegistry, PropSchema};
use crate::scene::props::{PropValue, props};

/// The components shipped with the workshop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

const TYPE_IDS: [&str; 2] = ["button", "basic-card"];

fn schema(name: &str, ty: &str, description: &str, default: Option<PropValue>) -> PropSchema {
    PropSchema {
        name: name.to_string(),
        ty: ty.to_string(),
        description: description.to_string(),
        default_value: default,
    }
}

fn button() -> ComponentDescriptor {
    ComponentDescriptor {
        id: "button".to_string(),
        name: "Button".to_string(),
        category: "Inputs".to_string(),
        default_props: props([
            ("variant", PropValue::from("primary")),
            ("size", PropValue::from("md")),
            ("isLoading", PropValue::from(false)),
            ("fullWidth", PropValue::from(false)),
            ("children", PropValue::from("Button")),
            ("leftIcon", PropValue::Null),
            ("rightIcon", PropValue::Null),
        ]),
        props: vec![
            schema(
                "variant",
                "'primary' | 'secondary' | 'outline' | 'ghost' | 'destructive' | 'success' | 'warning'",
                "Visual style variant.",
                Some(PropValue::from("primary")),
            ),
            schema(
                "size",
                "'xs' | 'sm' | 'md' | 'lg' | 'xl'",
                "Button size.",
                Some(PropValue::from("md")),
            ),
            schema(
                "isLoading",
                "boolean",
                "Shows a spinner and disables the button.",
                Some(PropValue::from(false)),
            ),
            schema(
                "leftIcon",
                "ReactNode",
                "Optional leading icon (hidden while loading).",
                None,
            ),
            schema(
                "rightIcon",
                "ReactNode",
                "Optional trailing icon (hidden while loading).",
                None,
            ),
            schema(
                "fullWidth",
                "boolean",
                "Expands button to full container width.",
                Some(PropValue::from(false)),
            ),
            schema(
                "children",
                "ReactNode",
                "Label content for the button.",
                Some(PropValue::from("Button")),
            ),
            schema("className", "string", "Optional CSS classes.", None),
        ],
    }
}

fn basic_card() -> ComponentDescriptor {
    ComponentDescriptor {
        id: "basic-card".to_string(),
        name: "Basic Card".to_string(),
        category: "Containers".to_string(),
        default_props: props([
            ("title", PropValue::from("Card Title")),
            ("description", PropValue::from("Card description goes here.")),
            ("children", PropValue::Null),
        ]),
        props: vec![
            schema(
                "title",
                "string",
                "Heading shown at the top of the card.",
                Some(PropValue::from("Card Title")),
            ),
            schema(
                "description",
                "string",
                "Supporting text under the title.",
                Some(PropValue::from("Card description goes here.")),
            ),
            schema("children", "ReactNode", "Card body content.", None),
        ],
    }
}

impl ComponentRegistry for BuiltinRegistry {
    fn lookup(&self, type_id: &str) -> Option<ComponentDescriptor> {
        match type_id {
            "button" => Some(button()),
            "basic-card" => Some(basic_card()),
            _ => None,
        }
    }

    fn type_ids(&self) -> Vec<String> {
        TYPE_IDS.iter().map(|s| s.to_string()).collect()
    }
}
