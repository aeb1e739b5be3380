//! Default agricultural dataset used when no knowledge file is configured

use super::types::KnowledgeEntry;

pub fn default_entries() -> Vec<KnowledgeEntry> {
    vec![
        // Crop and soil
        KnowledgeEntry::new(
            1,
            "What is the best soil for growing vegetables?",
            "The best soil for growing vegetables is loamy soil, which is a mix of sand, silt, and clay. It retains moisture well and drains easily.",
        ),
        KnowledgeEntry::new(
            2,
            "How do I test my soil's pH level?",
            "You can test your soil's pH level with a home testing kit, which can be purchased from an agricultural supply store. A pH between 6.0 and 7.0 is ideal for most crops.",
        ),
        KnowledgeEntry::new(
            3,
            "What is the best fertilizer for flowering plants?",
            "For flowering plants, a fertilizer with a higher phosphorus content is ideal.",
        )
        .with_recommendation(
            "Phosphorus-rich fertilizer",
            "Local agricultural supply store",
            "₹300",
        ),
        KnowledgeEntry::new(
            4,
            "Why are my plants wilting?",
            "Wilting can be a sign of either under-watering or over-watering. Check the soil moisture first and adjust your watering schedule accordingly.",
        ),
        // Pests and disease
        KnowledgeEntry::new(
            5,
            "How do I control pests like aphids on my plants?",
            "You can remove aphids with a strong stream of water or use a solution of water and mild soap. Neem oil is also an effective natural remedy.",
        )
        .with_recommendation("Neem Oil", "Agricultural co-op in your region", "₹150"),
        KnowledgeEntry::new(
            6,
            "What should I do about pests on my tomato plants?",
            "Common tomato pests include aphids and whiteflies. You can use an insecticidal soap spray or neem oil to control them. Ensure good air circulation around the plants.",
        )
        .with_recommendation("Insecticidal soap", "Local nursery", "₹200"),
        KnowledgeEntry::new(
            7,
            "What are common plant diseases?",
            "Common plant diseases include powdery mildew, blight, and rust. Good air circulation and proper watering can help prevent them. For a severe outbreak, use a fungicide.",
        )
        .with_recommendation("Fungicide", "Agricultural supply store", "₹450"),
        // Weather and climate
        KnowledgeEntry::new(
            8,
            "What is the weather forecast for tomorrow?",
            "The weather forecast for tomorrow is sunny with a high of 32°C. There is a low chance of rain.",
        ),
        KnowledgeEntry::new(
            9,
            "How do I protect my crops from a drought?",
            "During a drought, focus on deep, infrequent watering. You can also use mulch to help the soil retain moisture. Drip irrigation is a very effective method.",
        ),
        // Market
        KnowledgeEntry::new(
            10,
            "What is the current market price for tomatoes?",
            "The current market price for tomatoes is around ₹25 per kilogram. Prices may vary by region.",
        ),
        KnowledgeEntry::new(
            11,
            "How do I find the current market price of my crops?",
            "You can check the current market prices on government agricultural websites or by contacting your local market directly. Apps like AGMARKNET provide real-time data.",
        ),
        // Crop-specific
        KnowledgeEntry::new(
            12,
            "What crops should I grow in my region?",
            "In your region, a variety of crops can be grown successfully. For grains, consider rice, wheat, and sorghum. For cash crops, tomatoes and onions are ideal. For specific recommendations, consult with a local expert.",
        ),
        KnowledgeEntry::new(
            13,
            "How do I care for a wheat crop?",
            "Wheat is a Rabi crop that requires a cool climate. It needs about 50-75 cm of annual rainfall. Ensure proper fertilization before sowing and manage weeds during the early growth stages.",
        ),
        KnowledgeEntry::new(
            14,
            "How do I care for a rice crop?",
            "Rice is a Kharif crop that requires a lot of water. It needs high temperatures and heavy rainfall. The soil should be kept submerged in water during the growing season.",
        ),
        KnowledgeEntry::new(
            15,
            "How do I get rid of weeds in my field?",
            "Weeds can be controlled by hand weeding, using a hoe, or by applying herbicides. You can also use mulching to suppress weed growth.",
        )
        .with_recommendation("Herbicides", "Agricultural supply store", "₹500"),
    ]
}
