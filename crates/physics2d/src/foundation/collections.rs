//! Handle types for world-owned objects

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a body stored in a physics world
    pub struct BodyHandle;

    /// Stable handle to a joint stored in a physics world
    pub struct JointHandle;
}
