//! Field tables for the engine's reflection object types.
//!
//! Offsets hold for one engine build and must be re-verified when the build
//! changes. Each table is flat: a type the engine derives from another
//! repeats the base fields at the same absolute offsets, because the bytes
//! behind a derived object are one contiguous layout.

use super::{FieldDescriptor, FieldKind, StructLayout};

const fn f(name: &'static str, offset: u64, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::new(name, offset, kind)
}

/// Base object header every engine object starts with.
pub static OBJECT: StructLayout = StructLayout {
    name: "Object",
    size: 0x28,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
    ],
};

pub static FIELD: StructLayout = StructLayout {
    name: "Field",
    size: 0x30,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
    ],
};

pub static STRUCT: StructLayout = StructLayout {
    name: "Struct",
    size: 0xB0,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
        f("super_struct", 0x40, FieldKind::Ptr),
        f("children", 0x48, FieldKind::Ptr),
        f("child_properties", 0x50, FieldKind::Ptr),
        f("properties_size", 0x58, FieldKind::I32),
        f("min_alignment", 0x5C, FieldKind::I32),
        f("script", 0x60, FieldKind::Array),
        f("prop_link", 0x70, FieldKind::Ptr),
        f("ref_link", 0x78, FieldKind::Ptr),
        f("dtor_link", 0x80, FieldKind::Ptr),
        f("post_ct_link", 0x88, FieldKind::Ptr),
    ],
};

pub static SCRIPT_STRUCT: StructLayout = StructLayout {
    name: "ScriptStruct",
    size: 0xC0,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
        f("super_struct", 0x40, FieldKind::Ptr),
        f("children", 0x48, FieldKind::Ptr),
        f("child_properties", 0x50, FieldKind::Ptr),
        f("properties_size", 0x58, FieldKind::I32),
        f("min_alignment", 0x5C, FieldKind::I32),
        f("script", 0x60, FieldKind::Array),
        f("prop_link", 0x70, FieldKind::Ptr),
        f("ref_link", 0x78, FieldKind::Ptr),
        f("dtor_link", 0x80, FieldKind::Ptr),
        f("post_ct_link", 0x88, FieldKind::Ptr),
        f("struct_flags", 0xB0, FieldKind::U32),
        f("prepare_cpp_struct_ops_completed", 0xB4, FieldKind::Bool),
        f("cpp_struct_ops", 0xB8, FieldKind::Ptr),
    ],
};

pub static CLASS: StructLayout = StructLayout {
    name: "Class",
    size: 0x230,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
        f("super_struct", 0x40, FieldKind::Ptr),
        f("children", 0x48, FieldKind::Ptr),
        f("child_properties", 0x50, FieldKind::Ptr),
        f("properties_size", 0x58, FieldKind::I32),
        f("min_alignment", 0x5C, FieldKind::I32),
        f("script", 0x60, FieldKind::Array),
        f("prop_link", 0x70, FieldKind::Ptr),
        f("ref_link", 0x78, FieldKind::Ptr),
        f("dtor_link", 0x80, FieldKind::Ptr),
        f("post_ct_link", 0x88, FieldKind::Ptr),
        f("class_ctor", 0xB0, FieldKind::Ptr),
        f("class_vtable_helper_ctor_caller", 0xB8, FieldKind::Ptr),
        f("class_add_ref_objects", 0xC0, FieldKind::Ptr),
        f("class_status", 0xC8, FieldKind::U32),
        f("class_flags", 0xCC, FieldKind::U32),
        f("class_cast_flags", 0xD0, FieldKind::U64),
        f("class_within", 0xD8, FieldKind::Ptr),
        f("class_gen_by", 0xE0, FieldKind::Ptr),
        f("class_conf_name", 0xE8, FieldKind::Name),
        f("net_fields", 0x100, FieldKind::Array),
        f("class_default_obj", 0x118, FieldKind::Ptr),
        f("interfaces", 0x1D8, FieldKind::Array),
        f("native_func_lookup", 0x220, FieldKind::Array),
    ],
};

pub static ENUM: StructLayout = StructLayout {
    name: "Enum",
    size: 0x60,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
        f("cpp_type", 0x30, FieldKind::String),
        f("entries", 0x40, FieldKind::Array),
        f("enum_disp_name_fn", 0x58, FieldKind::Ptr),
    ],
};

pub static FUNCTION: StructLayout = StructLayout {
    name: "Function",
    size: 0xE0,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("next", 0x28, FieldKind::Ptr),
        f("super_struct", 0x40, FieldKind::Ptr),
        f("children", 0x48, FieldKind::Ptr),
        f("child_properties", 0x50, FieldKind::Ptr),
        f("properties_size", 0x58, FieldKind::I32),
        f("min_alignment", 0x5C, FieldKind::I32),
        f("script", 0x60, FieldKind::Array),
        f("prop_link", 0x70, FieldKind::Ptr),
        f("ref_link", 0x78, FieldKind::Ptr),
        f("dtor_link", 0x80, FieldKind::Ptr),
        f("post_ct_link", 0x88, FieldKind::Ptr),
        f("func_flags", 0xB0, FieldKind::U32),
        f("num_params", 0xB4, FieldKind::U8),
        f("params_size", 0xB6, FieldKind::U16),
        f("first_prop_to_init", 0xC0, FieldKind::Ptr),
        f("event_graph_func", 0xC8, FieldKind::Ptr),
        f("exec_func_ptr", 0xD8, FieldKind::Ptr),
    ],
};

/// The non-object field chain used by the property system.
pub static FFIELD: StructLayout = StructLayout {
    name: "FField",
    size: 0x38,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("class_private", 0x8, FieldKind::Ptr),
        f("owner", 0x10, FieldKind::Ptr),
        f("owner_is_uobject", 0x18, FieldKind::Bool),
        f("next", 0x20, FieldKind::Ptr),
        f("name_private", 0x28, FieldKind::Name),
        f("flags_private", 0x30, FieldKind::U32),
    ],
};

pub static PROPERTY: StructLayout = StructLayout {
    name: "Property",
    size: 0x78,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("class_private", 0x8, FieldKind::Ptr),
        f("owner", 0x10, FieldKind::Ptr),
        f("owner_is_uobject", 0x18, FieldKind::Bool),
        f("next", 0x20, FieldKind::Ptr),
        f("name_private", 0x28, FieldKind::Name),
        f("flags_private", 0x30, FieldKind::U32),
        f("array_dim", 0x38, FieldKind::I32),
        f("element_size", 0x3C, FieldKind::I32),
        f("property_flags", 0x40, FieldKind::U64),
        f("rep_index", 0x48, FieldKind::U16),
        f("blueprint_rep_cond", 0x4A, FieldKind::U8),
        f("offset_internal", 0x4C, FieldKind::I32),
        f("rep_notify_func", 0x50, FieldKind::Name),
        f("prop_link_next", 0x58, FieldKind::Ptr),
        f("next_ref", 0x60, FieldKind::Ptr),
        f("dtor_link_next", 0x68, FieldKind::Ptr),
        f("post_ct_link_next", 0x70, FieldKind::Ptr),
    ],
};

pub static ENGINE: StructLayout = StructLayout {
    name: "Engine",
    size: 0xD20,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("world_list", 0xC80, FieldKind::Array),
    ],
};

pub static WORLD: StructLayout = StructLayout {
    name: "World",
    size: 0x798,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("persistent_level", 0x30, FieldKind::Ptr),
        f("current_level_pending_visibility", 0xD0, FieldKind::Ptr),
        f("current_level_pending_invisibility", 0xD8, FieldKind::Ptr),
    ],
};

pub static GAME_INSTANCE: StructLayout = StructLayout {
    name: "GameInstance",
    size: 0x1A8,
    fields: &[
        f("vtable", 0x0, FieldKind::Ptr),
        f("object_flags", 0x8, FieldKind::U32),
        f("internal_index", 0xC, FieldKind::U32),
        f("class_private", 0x10, FieldKind::Ptr),
        f("name_private", 0x18, FieldKind::Name),
        f("outer_private", 0x20, FieldKind::Ptr),
        f("local_players", 0x38, FieldKind::Array),
        f("referenced_objects", 0x50, FieldKind::Array),
    ],
};
