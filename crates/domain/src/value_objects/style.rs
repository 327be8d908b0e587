//! The visual style catalog for poster generation.
//!
//! Repeated poster requests for the same movie should not all look alike,
//! so the rich prompt tier draws one of these descriptors at random. The
//! catalog is fixed at compile time and never empty; selection happens in
//! the engine through its injectable randomness port.

use serde::Serialize;

/// A named visual style used to diversify rich-tier poster prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    /// Unique catalog name.
    pub name: &'static str,
    /// Color palette description.
    pub color_palette: &'static str,
    /// Lighting description.
    pub lighting: &'static str,
    /// Overall mood.
    pub mood: &'static str,
    /// Composition guidance.
    pub composition: &'static str,
    /// Optional stylistic cross-reference used to steer tone.
    pub reference_aesthetic: Option<&'static str>,
}

/// The full style catalog.
pub fn style_catalog() -> &'static [StyleDescriptor] {
    STYLE_CATALOG
}

static STYLE_CATALOG: &[StyleDescriptor] = &[
    // === Explosions & fire ===
    StyleDescriptor {
        name: "Inferno Blast",
        color_palette: "Orange fire, red flames, yellow explosions, black smoke",
        lighting: "Explosive fireball lighting with intense heat glow",
        mood: "Explosive and intense with maximum destruction",
        composition: "Hero walking away from massive explosion behind them",
        reference_aesthetic: Some("Michael Bay style explosive action cinematography"),
    },
    StyleDescriptor {
        name: "Fireball Strike",
        color_palette: "Deep red, bright orange, yellow fire, and dark shadows",
        lighting: "Dramatic explosion lighting with fire reflections",
        mood: "High-intensity with pyroclastic energy",
        composition: "Close-up of determined hero with fireball erupting in background",
        reference_aesthetic: Some("John Woo bullet-time action aesthetic"),
    },
    StyleDescriptor {
        name: "Explosive Sunset",
        color_palette: "Burnt orange, crimson red, dark silhouettes against fire",
        lighting: "Backlit by massive explosion at golden hour",
        mood: "Epic and dramatic with apocalyptic scale",
        composition: "Hero silhouette against sunset merged with explosion",
        reference_aesthetic: Some("Christopher Nolan IMAX epic scale"),
    },
    StyleDescriptor {
        name: "Burning City",
        color_palette: "Fire orange, ash grey, smoke black, ember red",
        lighting: "City on fire with flames illuminating buildings",
        mood: "Catastrophic destruction with urban warfare",
        composition: "Hero in foreground with burning cityscape behind",
        reference_aesthetic: Some("Die Hard urban action style"),
    },
    StyleDescriptor {
        name: "Phoenix Rising",
        color_palette: "Gold flames, scarlet red, ash grey, bright yellow",
        lighting: "Rising fire with dramatic upward lighting",
        mood: "Rebirth through fire with triumphant energy",
        composition: "Hero emerging from flames with fire wings effect",
        reference_aesthetic: Some("Zack Snyder mythic action cinematography"),
    },
    // === Military & tactical ===
    StyleDescriptor {
        name: "Military Operation",
        color_palette: "Olive drab, khaki tan, camouflage green, steel grey",
        lighting: "Harsh tactical lighting with night vision green tint",
        mood: "Strategic and tactical with military precision",
        composition: "Soldiers in tactical formation with weapons ready",
        reference_aesthetic: Some("Zero Dark Thirty realistic military aesthetic"),
    },
    StyleDescriptor {
        name: "Black Ops Mission",
        color_palette: "Deep black, tactical grey, NVG green, red laser sights",
        lighting: "Night ops lighting with minimal illumination",
        mood: "Covert and stealthy with special forces intensity",
        composition: "Elite operators in darkness with tactical gear silhouettes",
        reference_aesthetic: Some("Call of Duty Modern Warfare tactical realism"),
    },
    StyleDescriptor {
        name: "Combat Zone",
        color_palette: "Desert tan, blood red, smoke grey, muzzle flash yellow",
        lighting: "Battlefield dust and gunfire flashes",
        mood: "Intense combat with war zone atmosphere",
        composition: "Soldiers in active firefight with bullets and explosions",
        reference_aesthetic: Some("Saving Private Ryan gritty war realism"),
    },
    StyleDescriptor {
        name: "Spec Ops",
        color_palette: "Midnight black, tactical grey, IR laser red, stealth blue",
        lighting: "High-tech tactical lighting with laser targeting",
        mood: "Elite forces with cutting-edge military tech",
        composition: "Special forces team with advanced weapons and gear",
        reference_aesthetic: Some("Act of Valor authentic SEAL team aesthetic"),
    },
    StyleDescriptor {
        name: "Tactical Strike",
        color_palette: "Gunmetal grey, olive green, red targeting reticle, black",
        lighting: "Tactical flashlight beams cutting through smoke",
        mood: "Precision military operation with focused intensity",
        composition: "Close quarters combat with tactical weapons",
        reference_aesthetic: Some("Sicario tense tactical operations"),
    },
    StyleDescriptor {
        name: "War Room",
        color_palette: "Command center blue, radar screen green, alert red, steel",
        lighting: "Multiple monitor glow with strategic map lighting",
        mood: "Strategic command with high-stakes decision making",
        composition: "Military leaders coordinating massive operation",
        reference_aesthetic: Some("Tom Clancy strategic military thriller"),
    },
    // === Urban action ===
    StyleDescriptor {
        name: "Rooftop Chase",
        color_palette: "City night lights, neon reflections, dark rooftops, moonlight",
        lighting: "Dynamic chase lighting with city glow",
        mood: "High-speed parkour with urban adrenaline",
        composition: "Hero mid-leap between buildings with city below",
        reference_aesthetic: Some("District 13 parkour action style"),
    },
    StyleDescriptor {
        name: "Street Fighter",
        color_palette: "Neon signs, wet asphalt, street lamp orange, fight club red",
        lighting: "Underground fight lighting with crowd shadows",
        mood: "Raw hand-to-hand combat with street intensity",
        composition: "Close combat between fighters in urban setting",
        reference_aesthetic: Some("The Raid brutal martial arts cinematography"),
    },
    StyleDescriptor {
        name: "City Under Siege",
        color_palette: "Emergency red, police blue, smoke grey, shattered glass",
        lighting: "Chaos lighting with sirens and emergency lights",
        mood: "Urban crisis with citywide threat",
        composition: "Hero defending city against massive attack",
        reference_aesthetic: Some("The Dark Knight urban siege atmosphere"),
    },
    StyleDescriptor {
        name: "Urban Warfare",
        color_palette: "Concrete grey, muzzle flash yellow, blood spatter red, smoke",
        lighting: "Street battle with gunfire and tactical lights",
        mood: "Intense firefight in urban environment",
        composition: "Combat in city streets with cover and tactics",
        reference_aesthetic: Some("Black Hawk Down urban combat realism"),
    },
    StyleDescriptor {
        name: "Parkour Pursuit",
        color_palette: "Urban grey, motion blur, bright daylight, athletic gear",
        lighting: "High-energy daylight with dynamic motion",
        mood: "High-speed chase with acrobatic movement",
        composition: "Hero in mid-air parkour move being pursued",
        reference_aesthetic: Some("Casino Royale crane chase sequence"),
    },
    StyleDescriptor {
        name: "Alley Combat",
        color_palette: "Dark shadows, dim street light, brick red, steel weapons",
        lighting: "Single overhead light in dark alley",
        mood: "Close-quarters brutal fight",
        composition: "Hand-to-hand combat in narrow alley space",
        reference_aesthetic: Some("John Wick tactical alley fight choreography"),
    },
    // === Sci-fi action ===
    StyleDescriptor {
        name: "Cyberpunk Streets",
        color_palette: "Neon cyan, hot pink holograms, dark urban, digital rain",
        lighting: "Cyberpunk neon with holographic displays",
        mood: "High-tech dystopian action",
        composition: "Hero with cybernetic enhancements in neon city",
        reference_aesthetic: Some("Blade Runner 2049 cyberpunk aesthetic"),
    },
    StyleDescriptor {
        name: "Space Battle",
        color_palette: "Deep space black, laser blue, explosion orange, star white",
        lighting: "Spacecraft explosions lighting up space",
        mood: "Epic space combat with massive scale",
        composition: "Fighter ships in intense space dogfight",
        reference_aesthetic: Some("Star Wars space battle cinematography"),
    },
    StyleDescriptor {
        name: "Mech Warfare",
        color_palette: "Metallic steel, HUD blue, laser red, industrial grey",
        lighting: "Mechanical cockpit lighting with HUD glow",
        mood: "Giant robot combat with mechanical warfare",
        composition: "Pilot in mech suit battling other mechs",
        reference_aesthetic: Some("Pacific Rim mech vs monster scale"),
    },
    StyleDescriptor {
        name: "Neon Dystopia",
        color_palette: "Electric purple, toxic green, rust orange, acid yellow",
        lighting: "Harsh neon with dystopian atmosphere",
        mood: "Cyberpunk rebellion with tech noir",
        composition: "Hacker/fighter in dystopian tech environment",
        reference_aesthetic: Some("Ghost in the Shell cyber-action aesthetic"),
    },
    StyleDescriptor {
        name: "Blade Runner Style",
        color_palette: "Noir rain, neon reflections, smoky blue, amber lights",
        lighting: "Film noir meets neon cyberpunk",
        mood: "Tech noir detective action",
        composition: "Agent in rain-soaked neon city",
        reference_aesthetic: Some("Blade Runner atmospheric tech noir"),
    },
    StyleDescriptor {
        name: "Matrix Mode",
        color_palette: "Code green, digital black, bullet trail silver, leather black",
        lighting: "Digital rain effect with bullet time",
        mood: "Reality-bending action with digital warfare",
        composition: "Hero dodging bullets in bullet-time freeze",
        reference_aesthetic: Some("The Matrix bullet-time revolutionary style"),
    },
    // === Post-apocalyptic ===
    StyleDescriptor {
        name: "Wasteland Survival",
        color_palette: "Desert tan, rust red, dust brown, bleached bone white",
        lighting: "Harsh desert sun with dust storms",
        mood: "Brutal survival in harsh wasteland",
        composition: "Survivor with weapons in barren wasteland",
        reference_aesthetic: Some("Mad Max Fury Road desert warfare"),
    },
    StyleDescriptor {
        name: "Desert Ruins",
        color_palette: "Sand yellow, ancient stone, sun-bleached, sky blue",
        lighting: "Desert heat shimmer with ruins",
        mood: "Ancient meets apocalypse",
        composition: "Warrior among crumbling civilization",
        reference_aesthetic: Some("Book of Eli post-apocalyptic journey"),
    },
    StyleDescriptor {
        name: "Post-Apocalyptic Dawn",
        color_palette: "Nuclear orange, ash grey, toxic green, dark shadows",
        lighting: "Contaminated atmosphere with eerie glow",
        mood: "Survival after catastrophe",
        composition: "Survivor watching destroyed world",
        reference_aesthetic: Some("The Road bleak survival atmosphere"),
    },
    StyleDescriptor {
        name: "Survivor Mode",
        color_palette: "Blood red, dirt brown, makeshift weapon grey, fire glow",
        lighting: "Campfire in darkness with danger lurking",
        mood: "Desperate survival with constant threat",
        composition: "Armed survivor ready for attack",
        reference_aesthetic: Some("The Last of Us survival horror action"),
    },
    StyleDescriptor {
        name: "Mad Max Style",
        color_palette: "Chrome metal, desert orange, engine oil black, blood red",
        lighting: "Desert sun with vehicle combat",
        mood: "Vehicular warfare in wasteland",
        composition: "War vehicles and road warriors",
        reference_aesthetic: Some("Mad Max vehicular combat mayhem"),
    },
    // === Martial arts ===
    StyleDescriptor {
        name: "Kung Fu Master",
        color_palette: "Martial arts temple gold, blood red, bamboo green, silk white",
        lighting: "Dramatic martial arts demonstration lighting",
        mood: "Disciplined martial arts with ancient tradition",
        composition: "Martial artist in powerful fighting stance",
        reference_aesthetic: Some("Crouching Tiger Hidden Dragon wire-fu elegance"),
    },
    StyleDescriptor {
        name: "Samurai Warrior",
        color_palette: "Katana steel, blood red, samurai armor, cherry blossom pink",
        lighting: "Dawn duel lighting with blade gleam",
        mood: "Honor-bound warrior with deadly precision",
        composition: "Samurai with drawn katana in battle stance",
        reference_aesthetic: Some("13 Assassins samurai combat choreography"),
    },
    StyleDescriptor {
        name: "Street Brawl",
        color_palette: "Bruise purple, split lip red, concrete grey, sweat shine",
        lighting: "Underground fight club lighting",
        mood: "Raw brutal hand-to-hand combat",
        composition: "Fighters mid-punch in visceral combat",
        reference_aesthetic: Some("Fight Club brutal underground aesthetic"),
    },
    StyleDescriptor {
        name: "Martial Arts Dojo",
        color_palette: "Training mat red, gi white, focus black, discipline gold",
        lighting: "Dojo interior with focused training light",
        mood: "Martial arts mastery and training intensity",
        composition: "Master and student in combat training",
        reference_aesthetic: Some("Ip Man traditional martial arts style"),
    },
    StyleDescriptor {
        name: "Dragon Fist",
        color_palette: "Dragon red, kung fu gold, mystical glow, martial black",
        lighting: "Mystical martial arts energy glow",
        mood: "Legendary martial arts with supernatural power",
        composition: "Fighter channeling chi with energy effects",
        reference_aesthetic: Some("Enter the Dragon legendary martial arts"),
    },
    // === Spy/thriller ===
    StyleDescriptor {
        name: "Agent Mode",
        color_palette: "Tuxedo black, martini glass, silencer grey, danger red",
        lighting: "Sophisticated spy lighting with shadows",
        mood: "Elegant spy thriller with deadly style",
        composition: "Suited agent with weapon in formal setting",
        reference_aesthetic: Some("James Bond sophisticated spy aesthetic"),
    },
    StyleDescriptor {
        name: "Surveillance Op",
        color_palette: "Monitor blue glow, camera feed green, target red, shadow black",
        lighting: "Multiple surveillance screen glow",
        mood: "High-tech espionage with digital warfare",
        composition: "Agent monitoring targets through technology",
        reference_aesthetic: Some("Enemy of the State surveillance thriller"),
    },
    StyleDescriptor {
        name: "Undercover Mission",
        color_palette: "Blended civilian, hidden weapon, tension grey, alert yellow",
        lighting: "Natural lighting hiding deadly intent",
        mood: "Covert infiltration with constant danger",
        composition: "Agent blending in while armed and dangerous",
        reference_aesthetic: Some("The Departed undercover tension"),
    },
    StyleDescriptor {
        name: "Espionage Style",
        color_palette: "Spy black, secret document, betrayal red, mystery blue",
        lighting: "Film noir spy shadows with intrigue",
        mood: "International espionage with high stakes",
        composition: "Spy with classified intel in shadowy meet",
        reference_aesthetic: Some("Tinker Tailor Soldier Spy cold war espionage"),
    },
    StyleDescriptor {
        name: "Covert Operation",
        color_palette: "Stealth black, silent weapon grey, infiltration blue, escape red",
        lighting: "Minimal light for covert insertion",
        mood: "Stealth mission with extreme precision",
        composition: "Operative infiltrating secure location",
        reference_aesthetic: Some("Mission: Impossible impossible mission style"),
    },
    // === Disaster ===
    StyleDescriptor {
        name: "Tsunami Wave",
        color_palette: "Ocean blue, foam white, destruction grey, panic",
        lighting: "Wall of water with catastrophic scale",
        mood: "Natural disaster with survival imperative",
        composition: "Hero escaping massive tidal wave",
        reference_aesthetic: Some("The Impossible disaster survival realism"),
    },
    StyleDescriptor {
        name: "Earthquake Strike",
        color_palette: "Crumbling concrete, dust cloud, structural steel, emergency red",
        lighting: "Collapsing buildings with dust and chaos",
        mood: "Seismic catastrophe with urban collapse",
        composition: "Hero navigating collapsing city",
        reference_aesthetic: Some("San Andreas earthquake destruction scale"),
    },
    StyleDescriptor {
        name: "Meteor Impact",
        color_palette: "Space rock grey, atmospheric entry orange, impact crater, sky fire",
        lighting: "Meteor strike with apocalyptic illumination",
        mood: "Extinction-level event with cosmic scale",
        composition: "Meteor descending with hero trying to prevent impact",
        reference_aesthetic: Some("Armageddon space disaster epic"),
    },
    StyleDescriptor {
        name: "Volcanic Eruption",
        color_palette: "Lava orange, volcanic ash grey, pyroclastic red, magma yellow",
        lighting: "Volcanic eruption glow with lava rivers",
        mood: "Volcanic catastrophe with primal destruction",
        composition: "Hero escaping erupting volcano",
        reference_aesthetic: Some("Dante's Peak volcanic disaster intensity"),
    },
    StyleDescriptor {
        name: "Hurricane Force",
        color_palette: "Storm grey, wind-swept, lightning white, rain dark",
        lighting: "Hurricane storm with lightning flashes",
        mood: "Extreme weather survival",
        composition: "Hero battling extreme wind and rain",
        reference_aesthetic: Some("Into the Storm extreme weather action"),
    },
    // === Other action ===
    StyleDescriptor {
        name: "Tank Battalion",
        color_palette: "Armored steel, tank treads, cannon fire, battlefield smoke",
        lighting: "Tank warfare with explosive combat",
        mood: "Armored warfare with mechanized destruction",
        composition: "Tank column advancing with explosions",
        reference_aesthetic: Some("Fury tank warfare gritty realism"),
    },
    StyleDescriptor {
        name: "Helicopter Assault",
        color_palette: "Rotor blur, door gunner, air cavalry, jungle green",
        lighting: "Aerial combat with rotor wash and tracers",
        mood: "Air cavalry assault with intense firepower",
        composition: "Attack helicopters in combat formation",
        reference_aesthetic: Some("Apocalypse Now helicopter attack sequence"),
    },
    StyleDescriptor {
        name: "Sniper Position",
        color_palette: "Scope crosshair, rifle barrel, ghillie suit camouflage, distance",
        lighting: "Sniper hide with precise targeting lighting",
        mood: "Precision marksmanship with patience",
        composition: "Sniper in position with target in sight",
        reference_aesthetic: Some("American Sniper precision marksmanship"),
    },
    StyleDescriptor {
        name: "Hostage Rescue",
        color_palette: "Breach charge, hostage orange, terrorist black, rescue team",
        lighting: "Dynamic entry with flashbangs",
        mood: "High-stakes rescue with time pressure",
        composition: "Tactical team breaching to save hostages",
        reference_aesthetic: Some("Captain Phillips hostage situation tension"),
    },
    StyleDescriptor {
        name: "Prison Break",
        color_palette: "Prison grey, freedom desperation, guard tower, escape route",
        lighting: "Prison searchlights with shadows for hiding",
        mood: "Desperate escape with impossible odds",
        composition: "Prisoner escaping through dangerous route",
        reference_aesthetic: Some("Escape Plan prison break action"),
    },
    StyleDescriptor {
        name: "Bullet Time",
        color_palette: "Slow motion bullet trail, frozen action, metallic sheen",
        lighting: "Frozen moment with bullet trajectory visible",
        mood: "Time-stopped action with precise choreography",
        composition: "Hero in bullet-dodging slow motion pose",
        reference_aesthetic: Some("The Matrix revolutionary bullet-time effect"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(style_catalog().len() >= 40);
    }

    #[test]
    fn test_style_names_are_unique() {
        let names: HashSet<_> = style_catalog().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), style_catalog().len());
    }

    #[test]
    fn test_styles_have_no_empty_fields() {
        for style in style_catalog() {
            assert!(!style.name.is_empty());
            assert!(!style.color_palette.is_empty());
            assert!(!style.lighting.is_empty());
            assert!(!style.mood.is_empty());
            assert!(!style.composition.is_empty());
            if let Some(aesthetic) = style.reference_aesthetic {
                assert!(!aesthetic.is_empty());
            }
        }
    }
}
