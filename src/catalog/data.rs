//! Standard game content: the item, enemy, event, world, rank, difficulty,
//! banner, and quest tables.
//!
//! Ids are stable strings; player records reference content by id only, so
//! table edits never invalidate saved players (missing ids go through the
//! catalog's fallback policy instead).

use super::types::*;

pub(super) fn rarity_table() -> Vec<RarityWeight> {
    vec![
        RarityWeight {
            rarity: Rarity::Common,
            weight: 100,
        },
        RarityWeight {
            rarity: Rarity::Uncommon,
            weight: 50,
        },
        RarityWeight {
            rarity: Rarity::Rare,
            weight: 20,
        },
        RarityWeight {
            rarity: Rarity::Epic,
            weight: 5,
        },
        RarityWeight {
            rarity: Rarity::Legendary,
            weight: 1,
        },
        // Weight 0: never selected by a random roll
        RarityWeight {
            rarity: Rarity::Boss,
            weight: 0,
        },
    ]
}

pub(super) fn items() -> Vec<ItemDef> {
    use ItemType::*;
    use Rarity::*;

    fn stats(damage: i32, defense: i32, luck: i32) -> ItemStats {
        ItemStats {
            damage,
            defense,
            luck,
        }
    }

    vec![
        // Common gear
        ItemDef {
            id: "item_stick",
            name: "Sturdy Stick",
            item_type: Weapon,
            rarity: Common,
            value: 5,
            stats: stats(2, 0, 1),
            max_durability: Some(20),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_rags",
            name: "Tattered Rags",
            item_type: Armor,
            rarity: Common,
            value: 3,
            stats: stats(0, 1, 1),
            max_durability: Some(15),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_rock",
            name: "Heavy Rock",
            item_type: Weapon,
            rarity: Common,
            value: 4,
            stats: stats(3, 0, 0),
            max_durability: Some(15),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_sandals",
            name: "Worn Sandals",
            item_type: Feet,
            rarity: Common,
            value: 5,
            stats: stats(0, 1, 2),
            max_durability: Some(20),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_bandana",
            name: "Cloth Bandana",
            item_type: Head,
            rarity: Common,
            value: 4,
            stats: stats(0, 1, 1),
            max_durability: Some(15),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_pants",
            name: "Torn Trousers",
            item_type: Legs,
            rarity: Common,
            value: 4,
            stats: stats(0, 1, 0),
            max_durability: Some(20),
            ..ItemDef::DEFAULT
        },
        // Common consumables
        ItemDef {
            id: "item_apple",
            name: "Bruised Apple",
            item_type: Consumable,
            rarity: Common,
            value: 2,
            effect: Some(ConsumableEffect::Heal(10)),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_bread",
            name: "Stale Bread",
            item_type: Consumable,
            rarity: Common,
            value: 3,
            effect: Some(ConsumableEffect::Heal(15)),
            ..ItemDef::DEFAULT
        },
        // Uncommon
        ItemDef {
            id: "item_shortsword",
            name: "Shortsword",
            item_type: Weapon,
            rarity: Uncommon,
            value: 25,
            stats: stats(6, 1, 0),
            max_durability: Some(50),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_leather_vest",
            name: "Leather Vest",
            item_type: Armor,
            rarity: Uncommon,
            value: 20,
            stats: stats(0, 4, 2),
            max_durability: Some(40),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_iron_mace",
            name: "Iron Mace",
            item_type: Weapon,
            rarity: Uncommon,
            value: 30,
            stats: stats(8, 0, 0),
            max_durability: Some(60),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_leather_boots",
            name: "Leather Boots",
            item_type: Feet,
            rarity: Uncommon,
            value: 18,
            stats: stats(0, 2, 3),
            max_durability: Some(35),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_leather_cap",
            name: "Leather Cap",
            item_type: Head,
            rarity: Uncommon,
            value: 15,
            stats: stats(0, 2, 1),
            max_durability: Some(30),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_leather_pants",
            name: "Leather Pants",
            item_type: Legs,
            rarity: Uncommon,
            value: 18,
            stats: stats(0, 3, 0),
            max_durability: Some(40),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_copper_ring",
            name: "Copper Ring",
            item_type: Accessory,
            rarity: Uncommon,
            value: 40,
            stats: stats(0, 1, 4),
            max_durability: Some(100),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_minor_potion",
            name: "Minor Healing Potion",
            item_type: Consumable,
            rarity: Uncommon,
            value: 15,
            effect: Some(ConsumableEffect::Heal(25)),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_key",
            name: "Iron Key",
            item_type: Consumable,
            rarity: Uncommon,
            value: 25,
            ..ItemDef::DEFAULT
        },
        // Rare
        ItemDef {
            id: "item_longsword",
            name: "Steel Longsword",
            item_type: Weapon,
            rarity: Rare,
            value: 100,
            stats: stats(14, 2, 0),
            max_durability: Some(100),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_chainmail",
            name: "Chainmail Tunic",
            item_type: Armor,
            rarity: Rare,
            value: 80,
            stats: stats(1, 10, 0),
            max_durability: Some(80),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_luck_charm",
            name: "Lucky Charm",
            item_type: Accessory,
            rarity: Rare,
            value: 150,
            stats: stats(0, 2, 8),
            max_durability: Some(50),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_steel_axe",
            name: "Steel Axe",
            item_type: Weapon,
            rarity: Rare,
            value: 110,
            stats: stats(16, 0, 0),
            max_durability: Some(90),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_plate_boots",
            name: "Steel Boots",
            item_type: Feet,
            rarity: Rare,
            value: 70,
            stats: stats(1, 6, 0),
            max_durability: Some(80),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_plate_helm",
            name: "Steel Helm",
            item_type: Head,
            rarity: Rare,
            value: 75,
            stats: stats(0, 6, 1),
            max_durability: Some(80),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_plate_legs",
            name: "Steel Greaves",
            item_type: Legs,
            rarity: Rare,
            value: 85,
            stats: stats(0, 7, 0),
            max_durability: Some(90),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_major_potion",
            name: "Major Healing Potion",
            item_type: Consumable,
            rarity: Rare,
            value: 50,
            effect: Some(ConsumableEffect::Heal(75)),
            ..ItemDef::DEFAULT
        },
        // Epic
        ItemDef {
            id: "item_obsidian_blade",
            name: "Obsidian Blade",
            item_type: Weapon,
            rarity: Epic,
            value: 500,
            stats: stats(25, 0, 5),
            max_durability: Some(150),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_dragon_vest",
            name: "Dragonscale Vest",
            item_type: Armor,
            rarity: Epic,
            value: 450,
            stats: stats(3, 20, 0),
            max_durability: Some(140),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_ancient_ring",
            name: "Ancient Ring",
            item_type: Accessory,
            rarity: Epic,
            value: 600,
            stats: stats(5, 5, 5),
            max_durability: Some(200),
            ..ItemDef::DEFAULT
        },
        // Legendary
        ItemDef {
            id: "item_excalibur",
            name: "Excalibur",
            item_type: Weapon,
            rarity: Legendary,
            value: 2000,
            stats: stats(50, 10, 10),
            max_durability: Some(300),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_celestial_robe",
            name: "Celestial Robes",
            item_type: Armor,
            rarity: Legendary,
            value: 1800,
            stats: stats(0, 40, 20),
            max_durability: Some(250),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_soul_gem",
            name: "Soul Gem",
            item_type: Accessory,
            rarity: Legendary,
            value: 2500,
            stats: stats(10, 10, 30),
            max_durability: Some(500),
            ..ItemDef::DEFAULT
        },
        // Boss unique drops
        ItemDef {
            id: "item_slime_crown",
            name: "Slime Crown",
            item_type: Head,
            rarity: Rare,
            value: 200,
            stats: stats(0, 5, 5),
            max_durability: Some(50),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_wolf_fang_dagger",
            name: "Wolf Fang",
            item_type: Weapon,
            rarity: Rare,
            value: 250,
            stats: stats(18, 0, 3),
            max_durability: Some(80),
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_living_wood_staff",
            name: "Living Staff",
            item_type: Weapon,
            rarity: Epic,
            value: 600,
            stats: stats(22, 5, 8),
            max_durability: Some(120),
            ..ItemDef::DEFAULT
        },
        // Tools
        ItemDef {
            id: "item_pickaxe",
            name: "Iron Pickaxe",
            item_type: Tool,
            rarity: Common,
            value: 50,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_gloves",
            name: "Leather Gloves",
            item_type: Tool,
            rarity: Common,
            value: 30,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_torch",
            name: "Torch",
            item_type: Tool,
            rarity: Common,
            value: 10,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "item_fishing_rod",
            name: "Fishing Rod",
            item_type: Tool,
            rarity: Common,
            value: 35,
            ..ItemDef::DEFAULT
        },
        // Materials
        ItemDef {
            id: "mat_iron_ore",
            name: "Iron Ore",
            item_type: Material,
            rarity: Common,
            value: 5,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_gold_ore",
            name: "Gold Ore",
            item_type: Material,
            rarity: Uncommon,
            value: 15,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_wood",
            name: "Oak Log",
            item_type: Material,
            rarity: Common,
            value: 2,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_stone",
            name: "Stone",
            item_type: Material,
            rarity: Common,
            value: 1,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_berry",
            name: "Wild Berry",
            item_type: Material,
            rarity: Common,
            value: 2,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_mushroom",
            name: "Red Mushroom",
            item_type: Material,
            rarity: Common,
            value: 3,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_fish",
            name: "Raw Trout",
            item_type: Material,
            rarity: Common,
            value: 5,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_silk",
            name: "Spider Silk",
            item_type: Material,
            rarity: Uncommon,
            value: 12,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "mat_crystal",
            name: "Glowing Crystal",
            item_type: Material,
            rarity: Rare,
            value: 40,
            ..ItemDef::DEFAULT
        },
        // Gacha exclusives
        ItemDef {
            id: "gacha_sword_training",
            name: "Otherworldly Training Sword",
            item_type: Weapon,
            rarity: Common,
            value: 50,
            stats: stats(18, 0, 0),
            max_durability: Some(60),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_vest_novice",
            name: "Summoner's Vest",
            item_type: Armor,
            rarity: Common,
            value: 50,
            stats: stats(0, 12, 1),
            max_durability: Some(60),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_blade_void",
            name: "Void Blade",
            item_type: Weapon,
            rarity: Rare,
            value: 500,
            stats: stats(20, 0, 5),
            max_durability: Some(150),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_plate_aegis",
            name: "Aegis Plate",
            item_type: Armor,
            rarity: Rare,
            value: 450,
            stats: stats(2, 18, 0),
            max_durability: Some(120),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_potion_elixir",
            name: "Celestial Elixir",
            item_type: Consumable,
            rarity: Rare,
            value: 500,
            effect: Some(ConsumableEffect::Heal(500)),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_shield_aegis",
            name: "Aegis Shield",
            item_type: Armor,
            rarity: Epic,
            value: 2500,
            stats: stats(15, 85, 0),
            max_durability: Some(150),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_boots_hermes",
            name: "Boots of Hermes",
            item_type: Feet,
            rarity: Epic,
            value: 3000,
            stats: stats(0, 25, 20),
            max_durability: Some(120),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_blade_eternity",
            name: "Blade of Eternity",
            item_type: Weapon,
            rarity: Legendary,
            value: 5000,
            stats: stats(160, 0, 15),
            max_durability: Some(200),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
        ItemDef {
            id: "gacha_helm_domination",
            name: "Helm of Domination",
            item_type: Head,
            rarity: Legendary,
            value: 6000,
            stats: stats(45, 70, 0),
            max_durability: Some(180),
            gacha_exclusive: true,
            ..ItemDef::DEFAULT
        },
    ]
}

pub(super) fn enemies() -> Vec<EnemyDef> {
    use Rarity::*;

    fn plain(id: &'static str, name: &'static str, max_hp: u32, xp: u64, gold: u64, rarity: Rarity) -> EnemyDef {
        EnemyDef {
            id,
            name,
            max_hp,
            xp,
            gold,
            rarity,
            loot: vec![],
        }
    }

    vec![
        plain("enemy_slime", "Slime", 30, 10, 5, Common),
        plain("enemy_rat", "Giant Rat", 25, 8, 3, Common),
        plain("enemy_bat", "Cave Bat", 20, 7, 4, Common),
        plain("enemy_wolf", "Wolf", 60, 25, 12, Uncommon),
        plain("enemy_goblin", "Goblin Scout", 50, 20, 10, Uncommon),
        plain("enemy_spider", "Forest Spider", 70, 30, 15, Uncommon),
        EnemyDef {
            loot: vec![LootDrop {
                item_id: "mat_silk",
                chance: 0.5,
                quantity: Some((1, 3)),
            }],
            ..plain("enemy_bandit", "Bandit", 100, 50, 30, Rare)
        },
        plain("enemy_orc", "Orc Grunt", 120, 65, 40, Rare),
        EnemyDef {
            loot: vec![LootDrop {
                item_id: "mat_stone",
                chance: 0.6,
                quantity: Some((2, 5)),
            }],
            ..plain("enemy_golem", "Rock Golem", 150, 80, 25, Rare)
        },
        EnemyDef {
            loot: vec![LootDrop {
                item_id: "item_slime_crown",
                chance: 0.3,
                quantity: None,
            }],
            ..plain("boss_slime_king", "King Slime", 300, 150, 100, Boss)
        },
        EnemyDef {
            loot: vec![LootDrop {
                item_id: "item_wolf_fang_dagger",
                chance: 0.3,
                quantity: None,
            }],
            ..plain("boss_alpha_wolf", "Alpha Wolf", 500, 300, 180, Boss)
        },
        EnemyDef {
            loot: vec![
                LootDrop {
                    item_id: "item_living_wood_staff",
                    chance: 0.3,
                    quantity: None,
                },
                LootDrop {
                    item_id: "mat_wood",
                    chance: 0.8,
                    quantity: Some((2, 6)),
                },
            ],
            ..plain("boss_treant", "Elder Treant", 800, 500, 250, Boss)
        },
    ]
}

pub(super) fn events() -> Vec<EventDef> {
    use EffectKind::*;
    use EventKind::*;
    use ItemFilter::*;
    use Rarity::*;

    fn choice(id: &'static str, text: &'static str, effect: ChoiceEffect) -> EventChoice {
        EventChoice {
            id,
            text,
            req: None,
            effect,
        }
    }

    fn gated(
        id: &'static str,
        text: &'static str,
        req: Requirement,
        effect: ChoiceEffect,
    ) -> EventChoice {
        EventChoice {
            id,
            text,
            req: Some(req),
            effect,
        }
    }

    vec![
        EventDef {
            id: "evt_shrine",
            title: "Mysterious Shrine",
            description: "You find an ancient shrine glowing with faint blue light. An offering bowl sits empty.",
            kind: Narrative,
            choices: vec![
                choice(
                    "pray",
                    "Pray for health",
                    ChoiceEffect::new(Heal(50)).chance(0.8).or_fail(
                        ChoiceEffect::new(Damage(10)).msg("The shrine rejects you!"),
                    ),
                ),
                choice(
                    "loot",
                    "Steal the offerings",
                    ChoiceEffect::new(Gold(50)).chance(0.5).or_fail(
                        ChoiceEffect::new(Combat(Uncommon)).msg("A guardian spirit attacks!"),
                    ),
                ),
                choice(
                    "leave",
                    "Leave it alone",
                    ChoiceEffect::new(Text).msg("You walk away respectfully."),
                ),
            ],
        },
        EventDef {
            id: "evt_wagon",
            title: "Abandoned Wagon",
            description: "A broken wagon lies on the side of the road. It looks like it was attacked recently.",
            kind: Narrative,
            choices: vec![
                choice(
                    "search",
                    "Search for supplies",
                    ChoiceEffect::new(GrantItem(ByRarity(Common))).chance(0.7).or_fail(
                        ChoiceEffect::new(Combat(Common))
                            .msg("A goblin jumps out from the wreckage!"),
                    ),
                ),
                choice("salvage", "Salvage parts", ChoiceEffect::new(Gold(20))),
                choice(
                    "ignore",
                    "Keep moving",
                    ChoiceEffect::new(Text).msg("Not your problem."),
                ),
            ],
        },
        EventDef {
            id: "evt_merchant",
            title: "Shady Merchant",
            description: "A hooded figure approaches you, offering a 'Mystery Box' for 50 Gold.",
            kind: Narrative,
            choices: vec![
                gated(
                    "buy",
                    "Buy Box (50G)",
                    Requirement::Gold(50),
                    ChoiceEffect::new(GrantItem(ByRarity(Rare))).chance(0.4).or_fail(
                        ChoiceEffect::new(GrantItem(ByRarity(Common))).msg("It was just junk..."),
                    ),
                ),
                choice(
                    "rob",
                    "Try to rob him",
                    ChoiceEffect::new(Gold(100)).chance(0.3).or_fail(
                        ChoiceEffect::new(Combat(Rare)).msg("The merchant is a retired assassin!"),
                    ),
                ),
                choice(
                    "decline",
                    "Decline",
                    ChoiceEffect::new(Text).msg("You wave him away."),
                ),
            ],
        },
        EventDef {
            id: "evt_traveler",
            title: "Injured Traveler",
            description: "A fellow adventurer is leaning against a tree, bleeding from a wound.",
            kind: Narrative,
            choices: vec![
                gated(
                    "help",
                    "Give Potion (Cost 20G)",
                    Requirement::Gold(20),
                    ChoiceEffect::new(Xp(100))
                        .msg("He thanks you profusely and shares his map knowledge."),
                ),
                choice(
                    "rob",
                    "Take his gear",
                    ChoiceEffect::new(Gold(40)).chance(0.8).or_fail(
                        ChoiceEffect::new(Damage(20)).msg("He fights back desperately!"),
                    ),
                ),
                choice(
                    "ignore",
                    "Walk past",
                    ChoiceEffect::new(Text).msg("Survival of the fittest."),
                ),
            ],
        },
        EventDef {
            id: "evt_berry",
            title: "Glowing Berry Bush",
            description: "You spot a bush with strange, pulsating purple berries.",
            kind: Narrative,
            choices: vec![
                choice(
                    "eat",
                    "Eat a berry",
                    ChoiceEffect::new(Heal(100)).chance(0.5).or_fail(
                        ChoiceEffect::new(Damage(15)).msg("It's poisonous!"),
                    ),
                ),
                choice(
                    "harvest",
                    "Harvest carefully",
                    ChoiceEffect::new(GrantItem(ByRarity(Uncommon))).chance(0.7).or_fail(
                        ChoiceEffect::new(Text).msg("The berries squish in your hands."),
                    ),
                ),
                choice(
                    "ignore",
                    "Too risky",
                    ChoiceEffect::new(Text).msg("Better safe than sorry."),
                ),
            ],
        },
        EventDef {
            id: "evt_monolith",
            title: "Ancient Monolith",
            description: "A stone slab covered in indecipherable runes stands before you.",
            kind: Narrative,
            choices: vec![
                choice(
                    "touch",
                    "Touch the runes",
                    ChoiceEffect::new(Xp(200)).chance(0.4).or_fail(
                        ChoiceEffect::new(Damage(30)).msg("Arcane energy shocks you!"),
                    ),
                ),
                choice("study", "Study from afar", ChoiceEffect::new(Xp(50))),
                choice(
                    "destroy",
                    "Smash it",
                    ChoiceEffect::new(Combat(Rare)).msg("You awoke something ancient!"),
                ),
            ],
        },
        EventDef {
            id: "evt_gambler",
            title: "Goblin Gambler",
            description: "A goblin isn't attacking; he's shuffling cards. 'Double or nothing?' he grins.",
            kind: Narrative,
            choices: vec![
                gated(
                    "bet_small",
                    "Bet 20 Gold",
                    Requirement::Gold(20),
                    ChoiceEffect::new(Gold(40)).chance(0.5).or_fail(
                        ChoiceEffect::new(Text).msg("You lost the hand."),
                    ),
                ),
                gated(
                    "bet_big",
                    "Bet 100 Gold",
                    Requirement::Gold(100),
                    ChoiceEffect::new(Gold(200)).chance(0.4).or_fail(
                        ChoiceEffect::new(Text).msg("You lost the hand."),
                    ),
                ),
                choice(
                    "fight",
                    "Just fight him",
                    ChoiceEffect::new(Combat(Uncommon)).msg("He flips the table!"),
                ),
            ],
        },
        EventDef {
            id: "evt_chest",
            title: "Cursed Chest",
            description: "A treasure chest sits in the open, wrapped in ominous black chains.",
            kind: Narrative,
            choices: vec![
                choice(
                    "open",
                    "Break the chains",
                    ChoiceEffect::new(GrantItem(ByRarity(Epic))).chance(0.3).or_fail(
                        ChoiceEffect::new(Combat(Rare)).msg("The chest was a mimic!"),
                    ),
                ),
                choice(
                    "dispel",
                    "Cleanse it",
                    ChoiceEffect::new(GrantItem(ByRarity(Rare))).chance(0.6).or_fail(
                        ChoiceEffect::new(Damage(25)).msg("The curse backfires."),
                    ),
                ),
                choice(
                    "leave",
                    "Walk away",
                    ChoiceEffect::new(Text).msg("Not worth the curse."),
                ),
            ],
        },
        EventDef {
            id: "evt_fountain",
            title: "Fountain of Youth",
            description: "Crystal clear water flows from a marble statue. You feel younger just looking at it.",
            kind: Narrative,
            choices: vec![
                choice(
                    "drink",
                    "Drink deeply",
                    ChoiceEffect::new(Heal(999)).chance(0.8).or_fail(
                        ChoiceEffect::new(Damage(50))
                            .msg("The water turns to acid in your mouth!"),
                    ),
                ),
                choice(
                    "bottle",
                    "Fill a bottle",
                    ChoiceEffect::new(GrantItem(ByRarity(Rare))),
                ),
                gated(
                    "coin",
                    "Toss a coin",
                    Requirement::Gold(1),
                    ChoiceEffect::new(Xp(50)).msg("You feel lucky."),
                ),
            ],
        },
        EventDef {
            id: "evt_wolf_pup",
            title: "Stray Wolf Pup",
            description: "A wolf pup is caught in a hunter's trap. It whimpers softly.",
            kind: Narrative,
            choices: vec![
                choice(
                    "free",
                    "Free the pup",
                    ChoiceEffect::new(GrantItem(ByRarity(Uncommon)))
                        .chance(0.7)
                        .msg("The pup leads you to a buried stash.")
                        .or_fail(
                            ChoiceEffect::new(Damage(10)).msg("It bit you in panic and ran."),
                        ),
                ),
                choice(
                    "feed",
                    "Feed it meat",
                    ChoiceEffect::new(Xp(150)).msg("You made a friend (for now)."),
                ),
                choice(
                    "leave",
                    "Nature is cruel",
                    ChoiceEffect::new(Text).msg("You leave it to its fate."),
                ),
            ],
        },
        EventDef {
            id: "evt_sleeping_giant",
            title: "Sleeping Giant",
            description: "A colossal giant slumbers, blocking the path. His snores shake the ground.",
            kind: Narrative,
            choices: vec![
                choice(
                    "sneak",
                    "Attempt to sneak past",
                    ChoiceEffect::new(Xp(100)).chance(0.6).or_fail(
                        ChoiceEffect::new(Combat(Epic))
                            .msg("You stepped on a twig! The giant awakens, enraged!"),
                    ),
                ),
                choice(
                    "steal",
                    "Rummage through his pouch",
                    ChoiceEffect::new(GrantItem(ByRarity(Rare))).chance(0.4).or_fail(
                        ChoiceEffect::new(Damage(50)).msg("The giant swats you away like a fly."),
                    ),
                ),
                choice(
                    "wait",
                    "Wait for him to move",
                    ChoiceEffect::new(Text)
                        .msg("You wait for an hour. He doesn't budge. You find another path."),
                ),
            ],
        },
        EventDef {
            id: "evt_troll_bridge",
            title: "Toll Bridge",
            description: "A grumpy troll blocks a sturdy-looking bridge. 'Toll! 25 gold to cross!' he grunts.",
            kind: Narrative,
            choices: vec![
                gated(
                    "pay",
                    "Pay the 25G toll",
                    Requirement::Gold(25),
                    ChoiceEffect::new(Text).msg("The troll lets you pass with a grumble."),
                ),
                choice(
                    "riddle",
                    "Answer a riddle instead",
                    ChoiceEffect::new(Xp(150))
                        .chance(0.5)
                        .msg("You answer correctly! The troll is impressed and lets you pass.")
                        .or_fail(
                            ChoiceEffect::new(Text)
                                .msg("'Wrong!' The troll forces you to take the long way around."),
                        ),
                ),
                choice(
                    "fight",
                    "Fight the troll",
                    ChoiceEffect::new(Combat(Rare))
                        .msg("The troll cracks his knuckles and readies his club."),
                ),
            ],
        },
        EventDef {
            id: "evt_rival",
            title: "Rival Adventurer",
            description: "A cocky adventurer blocks your path. 'This territory is mine! Prove your worth or leave!'",
            kind: Narrative,
            choices: vec![
                choice(
                    "duel",
                    "Duel them!",
                    ChoiceEffect::new(Combat(Rare)).msg("You accept the challenge!"),
                ),
                gated(
                    "wager",
                    "Wager 100G on the duel",
                    Requirement::Gold(100),
                    ChoiceEffect::new(Gold(200)).chance(0.5).or_fail(
                        ChoiceEffect::new(Combat(Rare))
                            .msg("You lost the bet! Now fight for your life!"),
                    ),
                ),
                gated(
                    "intimidate",
                    "Intimidate them",
                    Requirement::Stat {
                        stat: StatKind::Defense,
                        amount: 20,
                    },
                    ChoiceEffect::new(Text).msg("They see your gear and back down nervously."),
                ),
            ],
        },
        EventDef {
            id: "evt_hermit",
            title: "Hermit's Cave",
            description: "You stumble upon a small, clean cave. An old hermit sits inside, offering you a cup of tea.",
            kind: Narrative,
            choices: vec![
                choice(
                    "accept",
                    "Accept the tea",
                    ChoiceEffect::new(Heal(75)).msg("The tea is warm and rejuvenating."),
                ),
                choice(
                    "ask",
                    "Ask for wisdom",
                    ChoiceEffect::new(Xp(120))
                        .msg("The hermit shares a cryptic but insightful piece of advice."),
                ),
                choice(
                    "decline",
                    "Decline and leave",
                    ChoiceEffect::new(Text)
                        .msg("You politely decline and continue on your journey."),
                ),
            ],
        },
        // Gathering events
        EventDef {
            id: "evt_gold_vein",
            title: "Vein of Gold",
            description: "A shimmering vein of gold runs through the rock face here.",
            kind: Gathering,
            choices: vec![
                gated(
                    "mine",
                    "Mine it",
                    Requirement::Item {
                        id: "item_pickaxe",
                        name: "Iron Pickaxe",
                        consume: false,
                    },
                    ChoiceEffect::new(Gold(75)).msg("You chip away the gold!"),
                ),
                choice(
                    "leave",
                    "Leave it",
                    ChoiceEffect::new(Text).msg("You lack the tools to mine this."),
                ),
            ],
        },
        EventDef {
            id: "evt_rare_herb",
            title: "Rare Herb",
            description: "A rare, thorny medicinal herb grows in the shade.",
            kind: Gathering,
            choices: vec![
                gated(
                    "harvest",
                    "Harvest safely",
                    Requirement::Item {
                        id: "item_gloves",
                        name: "Leather Gloves",
                        consume: false,
                    },
                    ChoiceEffect::new(GrantItem(ByRarity(Uncommon)))
                        .msg("You safely harvested the herb."),
                ),
                choice(
                    "grab",
                    "Grab it barehanded",
                    ChoiceEffect::new(Text).chance(0.0).or_fail(
                        ChoiceEffect::new(Damage(15)).msg("The thorns cut your hands deeply!"),
                    ),
                ),
            ],
        },
        EventDef {
            id: "evt_locked_chest",
            title: "Locked Chest",
            description: "A sturdy chest with a heavy iron lock.",
            kind: Gathering,
            choices: vec![
                gated(
                    "key",
                    "Use Iron Key",
                    Requirement::Item {
                        id: "item_key",
                        name: "Iron Key",
                        consume: true,
                    },
                    ChoiceEffect::new(GrantItem(ByRarity(Rare))).msg("The lock clicks open."),
                ),
                gated(
                    "pick",
                    "Pick Lock",
                    Requirement::Stat {
                        stat: StatKind::Luck,
                        amount: 5,
                    },
                    ChoiceEffect::new(GrantItem(ByRarity(Uncommon))).chance(0.6).or_fail(
                        ChoiceEffect::new(Text).msg("You failed to pick the lock."),
                    ),
                ),
                choice(
                    "leave",
                    "Leave it",
                    ChoiceEffect::new(Text).msg("It remains locked."),
                ),
            ],
        },
        EventDef {
            id: "evt_fishing_spot",
            title: "Quiet Fishing Spot",
            description: "A tranquil pond seems teeming with fish.",
            kind: Gathering,
            choices: vec![
                gated(
                    "fish_rod",
                    "Use a Fishing Rod",
                    Requirement::Item {
                        id: "item_fishing_rod",
                        name: "Fishing Rod",
                        consume: false,
                    },
                    ChoiceEffect::new(GrantItem(ById("mat_fish"))).chance(0.8).or_fail(
                        ChoiceEffect::new(Text).msg("The fish aren't biting."),
                    ),
                ),
                choice(
                    "fish_hands",
                    "Try to catch one by hand",
                    ChoiceEffect::new(GrantItem(ById("mat_fish"))).chance(0.1).or_fail(
                        ChoiceEffect::new(Text).msg("They're too fast!"),
                    ),
                ),
                choice(
                    "skip_stone",
                    "Skip a stone",
                    ChoiceEffect::new(Text).msg("Plip... plip... plip. That was relaxing."),
                ),
            ],
        },
        EventDef {
            id: "evt_spider_grove",
            title: "Spider-Infested Grove",
            description: "Thick, sticky webs cover everything here. You can see valuable silk.",
            kind: Gathering,
            choices: vec![
                gated(
                    "burn",
                    "Burn the webs",
                    Requirement::Item {
                        id: "item_torch",
                        name: "Torch",
                        consume: true,
                    },
                    ChoiceEffect::new(GrantItem(ById("mat_silk")))
                        .msg("The webs burn away, leaving pristine silk."),
                ),
                choice(
                    "cut",
                    "Cut through with a weapon",
                    ChoiceEffect::new(GrantItem(ById("mat_silk"))).chance(0.5).or_fail(
                        ChoiceEffect::new(Combat(Uncommon))
                            .msg("A giant spider descends to protect its web!"),
                    ),
                ),
                choice(
                    "avoid",
                    "Avoid this place",
                    ChoiceEffect::new(Text).msg("You're not a fan of spiders."),
                ),
            ],
        },
        EventDef {
            id: "evt_crystal_cave",
            title: "Crystal Cave",
            description: "A cave whose walls are lined with faintly glowing, fist-sized crystals.",
            kind: Gathering,
            choices: vec![
                gated(
                    "mine",
                    "Mine a crystal",
                    Requirement::Item {
                        id: "item_pickaxe",
                        name: "Iron Pickaxe",
                        consume: false,
                    },
                    ChoiceEffect::new(GrantItem(ById("mat_crystal"))),
                ),
                choice(
                    "absorb",
                    "Absorb the energy",
                    ChoiceEffect::new(Heal(50)).chance(0.7).or_fail(
                        ChoiceEffect::new(Damage(10))
                            .msg("The energy is unstable and hurts you."),
                    ),
                ),
                choice(
                    "leave",
                    "Leave the cave",
                    ChoiceEffect::new(Text).msg("You leave the beautiful cave untouched."),
                ),
            ],
        },
    ]
}

pub(super) fn encounters() -> Vec<&'static str> {
    vec![
        "A gentle breeze rustles the tall grass, carrying the scent of wildflowers.",
        "You spot a peculiar, glowing mushroom, but wisely decide not to touch it.",
        "The sun breaks through the clouds, warming your face.",
        "In the distance, you hear the faint sound of running water.",
        "You pause for a moment, taking in the serene, sprawling landscape.",
        "An unusual rock formation catches your eye.",
        "A small butterfly flutters past your nose.",
        "The path ahead is clear and the air is fresh.",
    ]
}

pub(super) fn worlds() -> Vec<WorldDef> {
    vec![WorldDef {
        id: "world_green_valley",
        name: "Green Valley",
        min_level: 1,
        zones: vec![
            ZoneDef {
                name: "Whispering Creek",
                description: "A quiet stream inhabited by slimes.",
                min_level: 1,
                boss_id: "boss_slime_king",
            },
            ZoneDef {
                name: "Shadow Thicket",
                description: "Dense woods where wolves prowl.",
                min_level: 5,
                boss_id: "boss_alpha_wolf",
            },
            ZoneDef {
                name: "Ancient Grove",
                description: "The heart of the forest.",
                min_level: 10,
                boss_id: "boss_treant",
            },
        ],
    }]
}

pub(super) fn ranks() -> Vec<RankDef> {
    vec![
        RankDef {
            id: "rank_adventurer",
            name: "Adventurer",
            min_level: 1,
        },
        RankDef {
            id: "rank_veteran",
            name: "Veteran",
            min_level: 10,
        },
        RankDef {
            id: "rank_elite",
            name: "Elite",
            min_level: 25,
        },
        RankDef {
            id: "rank_champion",
            name: "Champion",
            min_level: 50,
        },
        RankDef {
            id: "rank_legend",
            name: "Legend",
            min_level: 100,
        },
    ]
}

pub(super) fn difficulties() -> Vec<DifficultyDef> {
    vec![
        DifficultyDef {
            id: "difficulty_easy",
            name: "Easy",
            multipliers: DifficultyMultipliers {
                xp: 0.8,
                enemy_hp: 0.7,
                enemy_dmg: 0.7,
                loot_chance: 0.8,
                rare_loot_chance: 0.5,
            },
        },
        DifficultyDef {
            id: "difficulty_normal",
            name: "Normal",
            multipliers: DifficultyMultipliers {
                xp: 1.0,
                enemy_hp: 1.0,
                enemy_dmg: 1.0,
                loot_chance: 1.0,
                rare_loot_chance: 1.0,
            },
        },
        DifficultyDef {
            id: "difficulty_hard",
            name: "Hard",
            multipliers: DifficultyMultipliers {
                xp: 1.5,
                enemy_hp: 1.5,
                enemy_dmg: 1.5,
                loot_chance: 1.2,
                rare_loot_chance: 2.0,
            },
        },
    ]
}

pub(super) fn banners() -> Vec<GachaBanner> {
    use Rarity::*;

    fn rate(rarity: Rarity, percent: f64) -> BannerRate {
        BannerRate { rarity, percent }
    }

    vec![
        GachaBanner {
            id: "banner_standard",
            name: "Standard Supply",
            cost: 50,
            rates: vec![
                rate(Common, 60.0),
                rate(Uncommon, 30.0),
                rate(Rare, 8.0),
                rate(Epic, 1.5),
                rate(Legendary, 0.5),
            ],
            pool: BannerPool::All,
        },
        GachaBanner {
            id: "banner_warrior",
            name: "Warrior's Cache",
            cost: 150,
            rates: vec![
                rate(Common, 40.0),
                rate(Uncommon, 40.0),
                rate(Rare, 15.0),
                rate(Epic, 4.0),
                rate(Legendary, 1.0),
            ],
            pool: BannerPool::Equipment,
        },
        GachaBanner {
            id: "banner_fortune",
            name: "Fortune's Favor",
            cost: 500,
            rates: vec![
                rate(Common, 30.0),
                rate(Uncommon, 30.0),
                rate(Rare, 30.0),
                rate(Epic, 8.0),
                rate(Legendary, 2.0),
            ],
            pool: BannerPool::All,
        },
    ]
}

pub(super) fn quests() -> Vec<QuestTemplate> {
    use QuestKind::*;

    vec![
        QuestTemplate {
            id: "q_hunt_slime",
            name: "Slime Squasher",
            description: "Defeat 5 Slimes.",
            kind: Hunt,
            target_id: "enemy_slime",
            target_name: "Slime",
            amount: 5,
            reward_gold: 25,
            reward_xp: 50,
        },
        QuestTemplate {
            id: "q_hunt_rat",
            name: "Pest Control",
            description: "Exterminate 3 Giant Rats.",
            kind: Hunt,
            target_id: "enemy_rat",
            target_name: "Giant Rat",
            amount: 3,
            reward_gold: 15,
            reward_xp: 30,
        },
        QuestTemplate {
            id: "q_hunt_wolf",
            name: "Wolf Hunter",
            description: "Hunt 3 Wolves.",
            kind: Hunt,
            target_id: "enemy_wolf",
            target_name: "Wolf",
            amount: 3,
            reward_gold: 60,
            reward_xp: 100,
        },
        QuestTemplate {
            id: "q_collect_wood",
            name: "Firewood",
            description: "Gather 3 Oak Logs.",
            kind: Collect,
            target_id: "mat_wood",
            target_name: "Oak Log",
            amount: 3,
            reward_gold: 20,
            reward_xp: 20,
        },
        QuestTemplate {
            id: "q_collect_berry",
            name: "Berry Picker",
            description: "Collect 5 Wild Berries.",
            kind: Collect,
            target_id: "mat_berry",
            target_name: "Wild Berry",
            amount: 5,
            reward_gold: 25,
            reward_xp: 25,
        },
        QuestTemplate {
            id: "q_collect_iron",
            name: "Heavy Metal",
            description: "Bring 2 Iron Ore.",
            kind: Collect,
            target_id: "mat_iron_ore",
            target_name: "Iron Ore",
            amount: 2,
            reward_gold: 80,
            reward_xp: 80,
        },
    ]
}
