use serde::{Deserialize, Serialize};

use crate::catalog::ItemType;
use crate::player::inventory::ItemInstance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Head,
    Weapon,
    Armor,
    Legs,
    Feet,
    Accessory,
    Tool1,
    Tool2,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 8] = [
        EquipSlot::Head,
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::Legs,
        EquipSlot::Feet,
        EquipSlot::Accessory,
        EquipSlot::Tool1,
        EquipSlot::Tool2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Head => "head",
            EquipSlot::Weapon => "weapon",
            EquipSlot::Armor => "armor",
            EquipSlot::Legs => "legs",
            EquipSlot::Feet => "feet",
            EquipSlot::Accessory => "accessory",
            EquipSlot::Tool1 => "tool1",
            EquipSlot::Tool2 => "tool2",
        }
    }

    /// The item type this slot accepts. Both tool slots accept `Tool`.
    pub fn accepts(&self) -> ItemType {
        match self {
            EquipSlot::Head => ItemType::Head,
            EquipSlot::Weapon => ItemType::Weapon,
            EquipSlot::Armor => ItemType::Armor,
            EquipSlot::Legs => ItemType::Legs,
            EquipSlot::Feet => ItemType::Feet,
            EquipSlot::Accessory => ItemType::Accessory,
            EquipSlot::Tool1 | EquipSlot::Tool2 => ItemType::Tool,
        }
    }
}

/// The eight named equipment slots. Tools get two slots; everything else is
/// one slot per item type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub head: Option<ItemInstance>,
    pub weapon: Option<ItemInstance>,
    pub armor: Option<ItemInstance>,
    pub legs: Option<ItemInstance>,
    pub feet: Option<ItemInstance>,
    pub accessory: Option<ItemInstance>,
    pub tool1: Option<ItemInstance>,
    pub tool2: Option<ItemInstance>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> &Option<ItemInstance> {
        match slot {
            EquipSlot::Head => &self.head,
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Legs => &self.legs,
            EquipSlot::Feet => &self.feet,
            EquipSlot::Accessory => &self.accessory,
            EquipSlot::Tool1 => &self.tool1,
            EquipSlot::Tool2 => &self.tool2,
        }
    }

    pub fn get_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemInstance> {
        match slot {
            EquipSlot::Head => &mut self.head,
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Legs => &mut self.legs,
            EquipSlot::Feet => &mut self.feet,
            EquipSlot::Accessory => &mut self.accessory,
            EquipSlot::Tool1 => &mut self.tool1,
            EquipSlot::Tool2 => &mut self.tool2,
        }
    }

    pub fn set(&mut self, slot: EquipSlot, item: Option<ItemInstance>) {
        *self.get_mut(slot) = item;
    }

    /// The slot a freshly equipped item of this type should land in, or
    /// `None` for unequippable types. A second tool goes to the free tool
    /// slot; with both occupied, tool1 gets swapped.
    pub fn target_slot(&self, item_type: ItemType) -> Option<EquipSlot> {
        match item_type {
            ItemType::Head => Some(EquipSlot::Head),
            ItemType::Weapon => Some(EquipSlot::Weapon),
            ItemType::Armor => Some(EquipSlot::Armor),
            ItemType::Legs => Some(EquipSlot::Legs),
            ItemType::Feet => Some(EquipSlot::Feet),
            ItemType::Accessory => Some(EquipSlot::Accessory),
            ItemType::Tool => {
                if self.tool1.is_none() {
                    Some(EquipSlot::Tool1)
                } else if self.tool2.is_none() {
                    Some(EquipSlot::Tool2)
                } else {
                    Some(EquipSlot::Tool1)
                }
            }
            ItemType::Consumable | ItemType::Material => None,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &ItemInstance> {
        EquipSlot::ALL
            .iter()
            .filter_map(move |slot| self.get(*slot).as_ref())
    }

    /// Whether any slot holds an instance of the given item id.
    pub fn holds(&self, item_id: &str) -> bool {
        self.iter_equipped().any(|i| i.item_id == item_id)
    }
}
