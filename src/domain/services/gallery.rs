use serde::Serialize;

/// Built-in invitation design, picked by id at creation time.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct DesignTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub colors: [&'static str; 3],
}

pub const DESIGN_TEMPLATES: &[DesignTemplate] = &[
    DesignTemplate { id: "classic", name: "Classic Elegance", description: "Timeless and sophisticated design perfect for formal events", category: "formal", colors: ["#2c3e50", "#ecf0f1", "#3498db"] },
    DesignTemplate { id: "modern", name: "Modern Minimalist", description: "Clean, contemporary design with bold typography", category: "modern", colors: ["#34495e", "#ffffff", "#e74c3c"] },
    DesignTemplate { id: "floral", name: "Floral Garden", description: "Beautiful botanical elements perfect for spring events", category: "nature", colors: ["#27ae60", "#f8c471", "#e8f5e8"] },
    DesignTemplate { id: "vintage", name: "Vintage Charm", description: "Nostalgic design with classic typography and ornaments", category: "vintage", colors: ["#8b4513", "#f4e4bc", "#d2691e"] },
    DesignTemplate { id: "festive", name: "Festive Celebration", description: "Vibrant and joyful design for parties and celebrations", category: "party", colors: ["#ff6b6b", "#4ecdc4", "#45b7d1"] },
    DesignTemplate { id: "corporate", name: "Corporate Professional", description: "Professional design perfect for business events", category: "business", colors: ["#2c3e50", "#3498db", "#ecf0f1"] },
    DesignTemplate { id: "luxury", name: "Luxury Gold", description: "Elegant gold accents for premium events", category: "luxury", colors: ["#000000", "#ffd700", "#ffffff"] },
    DesignTemplate { id: "ocean", name: "Ocean Breeze", description: "Refreshing blue tones inspired by the sea", category: "nature", colors: ["#0077be", "#87ceeb", "#f0f8ff"] },
    DesignTemplate { id: "sunset", name: "Sunset Romance", description: "Warm sunset colors perfect for romantic events", category: "romantic", colors: ["#ff6b35", "#f7931e", "#ffb347"] },
    DesignTemplate { id: "neon", name: "Neon Party", description: "Electric neon colors for energetic celebrations", category: "party", colors: ["#ff0080", "#00ff80", "#8000ff"] },
    DesignTemplate { id: "forest", name: "Forest Green", description: "Natural green tones for outdoor events", category: "nature", colors: ["#228b22", "#90ee90", "#f0fff0"] },
    DesignTemplate { id: "royal", name: "Royal Purple", description: "Majestic purple design for elegant occasions", category: "luxury", colors: ["#663399", "#dda0dd", "#f8f0ff"] },
    DesignTemplate { id: "cherry", name: "Cherry Blossom", description: "Delicate pink cherry blossom theme", category: "nature", colors: ["#ffb7c5", "#ffc0cb", "#fff0f5"] },
    DesignTemplate { id: "midnight", name: "Midnight Glamour", description: "Sophisticated dark theme with silver accents", category: "luxury", colors: ["#191970", "#c0c0c0", "#f5f5f5"] },
    DesignTemplate { id: "tropical", name: "Tropical Paradise", description: "Vibrant tropical colors for summer events", category: "nature", colors: ["#ff7f50", "#32cd32", "#ffd700"] },
    DesignTemplate { id: "rustic", name: "Rustic Barn", description: "Warm rustic design perfect for country weddings", category: "rustic", colors: ["#8b4513", "#daa520", "#f5deb3"] },
    DesignTemplate { id: "galaxy", name: "Galaxy Dreams", description: "Cosmic theme with stars and nebula colors", category: "modern", colors: ["#191970", "#9370db", "#4169e1"] },
    DesignTemplate { id: "autumn", name: "Autumn Leaves", description: "Warm autumn colors perfect for fall events", category: "nature", colors: ["#ff8c00", "#dc143c", "#ffd700"] },
];

pub fn template_exists(id: &str) -> bool {
    DESIGN_TEMPLATES.iter().any(|t| t.id == id)
}
