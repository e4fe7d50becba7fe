//! A small configurable target covering every value kind, for unit tests.

use crate::registry::{Configurable, EnumNicks, PropertyDescriptor, Setter};

pub const MODE_NICKS: EnumNicks = &[("fast", 0), ("slow", 1), ("off", 2)];

#[derive(Debug, Clone, PartialEq)]
pub struct Gadget {
    pub flag: bool,
    pub count: u32,
    pub offset: i32,
    pub total: i64,
    pub ratio: f64,
    pub label: String,
    pub mode: i32,
}

impl Default for Gadget {
    fn default() -> Self {
        Self {
            flag: false,
            count: 7,
            offset: -1,
            total: 0,
            ratio: 1.0,
            label: "initial".to_string(),
            mode: 1,
        }
    }
}

static GADGET_PROPERTIES: &[PropertyDescriptor<Gadget>] = &[
    PropertyDescriptor::new("flag", Setter::Bool(|p: &mut Gadget, v| p.flag = v)),
    PropertyDescriptor::new("count", Setter::UInt32(|p: &mut Gadget, v| p.count = v)),
    PropertyDescriptor::new("offset", Setter::Int32(|p: &mut Gadget, v| p.offset = v)),
    PropertyDescriptor::new("total", Setter::Int64(|p: &mut Gadget, v| p.total = v)),
    PropertyDescriptor::new("ratio", Setter::Float64(|p: &mut Gadget, v| p.ratio = v)),
    PropertyDescriptor::new("label", Setter::String(|p: &mut Gadget, v| p.label = v)),
    PropertyDescriptor::new(
        "mode",
        Setter::Enum {
            nicks: MODE_NICKS,
            set: |p: &mut Gadget, v| p.mode = v,
        },
    ),
];

impl Configurable for Gadget {
    fn properties() -> &'static [PropertyDescriptor<Self>] {
        GADGET_PROPERTIES
    }
}
