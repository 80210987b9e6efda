//! Static page copy.

pub const TAGLINE: &str = "A Deep Learning-Powered System for Accurate Detection, Segmentation, \
and Stage-Based Treatment Guidance of Dermatographia Urticaria and Related Skin Conditions";

pub const ADDRESS: &str = "Graphic Era Hill University, Clement Town, Dehradun - 248001";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn.Ankit", "https://in.linkedin.com/in/ankitk247"),
    ("LinkedIn.Nishkarsh", "https://www.linkedin.com/in/nishkarsh70"),
];

pub const SLIDES: &[&str] = &["/images/s2.jpg", "/images/s3.png"];

pub const INFO: &str = "UrticaScan AI analyzes a photo of affected skin, names the most likely \
condition among five classes, outlines the affected region and estimates how much of the \
pictured skin it covers. The estimate maps to a severity stage with matching treatment \
suggestions. Results are a screening aid and do not replace a dermatologist.";

pub const FLOWCHART: &str = "/images/flowchart.png";

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        title: "Image Upload",
        description: "A high-resolution image capturing the entirety of the affected skin region \
            is uploaded and then transmitted to the backend for further processing.",
        image: "/images/upload.jpg",
    },
    Step {
        title: "Image is processed",
        description: "The image is subsequently processed to ensure compatibility with the \
            ResNet50 model.",
        image: "/images/processing.jpg",
    },
    Step {
        title: "Classification",
        description: "The image is fed into the model, which predicts the most likely skin \
            condition from Dermatographia Urticaria, Eczema, Psoriasis pictures Lichen Planus \
            and related diseases, Tinea Ringworm Candidiasis and other Fungal Infections, and \
            Warts Molluscum and other Viral Infections.",
        image: "/images/classification.jpg",
    },
    Step {
        title: "Results Displayed",
        description: "The final results are displayed with prediction confidence and possible \
            skin conditions, allowing further medical evaluation.",
        image: "/images/result.jpg",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ankit Kumar Gola",
        role: "B.Tech CSE",
        image: "/images/me.png",
    },
    TeamMember {
        name: "Daksh Gupta",
        role: "B.Tech CSE",
        image: "/images/daksh.jpg",
    },
    TeamMember {
        name: "Nishkarsh",
        role: "B.Tech CSE",
        image: "/images/Nishkarsh_i.jpg",
    },
];

pub struct Disease {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const DISEASES: &[Disease] = &[
    Disease {
        name: "Dermatographia Urticaria",
        image: "/images/dermo.jpg",
        description: "Red, raised welts appear on the skin after light scratching or pressure. \
            Symptoms usually show within minutes and fade within 30 minutes to an hour. The \
            condition is typically harmless but can be itchy or uncomfortable.",
    },
    Disease {
        name: "Warts Molluscum and other Viral Infections",
        image: "/images/warts.jpg",
        description: "Caused by viruses like HPV and poxvirus; small skin-colored bumps that \
            spread through skin contact; treatable with cryotherapy or topical medication.",
    },
    Disease {
        name: "Psoriasis pictures Lichen Planus and related diseases",
        image: "/images/psos.jpg",
        description: "Chronic autoimmune conditions causing scaly or itchy patches, often on \
            elbows, knees or wrists; treated with steroids or phototherapy.",
    },
    Disease {
        name: "Eczema",
        image: "/images/eczema.jpg",
        description: "Inflammatory condition causing dry, itchy patches; common in children and \
            allergy-prone individuals; treated with moisturizers and steroids.",
    },
    Disease {
        name: "Tinea Ringworm Candidiasis and other Fungal Infections",
        image: "/images/tinea.jpg",
        description: "Red, itchy, scaly fungal rashes on skin, scalp or moist areas; contagious \
            via contact; treated using topical or oral antifungals.",
    },
];

pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const CONDITION: Section = Section {
    id: "dermatographia",
    title: "Dermatographia Urticaria",
    description: "Dermatographia Urticaria is a skin condition characterized by raised red lines \
        or welts that appear after the skin is scratched or rubbed. It is a form of physical \
        urticaria caused by an exaggerated release of histamine from skin cells. Symptoms \
        include itching, redness, and swelling.",
    image: "/images/me.jpg",
};

pub const CLASSIFICATION: Section = Section {
    id: "classification",
    title: "Classification Working",
    description: "A ResNet50 network classifies skin images from extracted features. The model \
        analyzes the uploaded image and predicts the most likely condition with a confidence \
        score.",
    image: "/images/res50.png",
};

pub const SEGMENTATION: Section = Section {
    id: "segmentation",
    title: "Segmentation Working",
    description: "Segmentation identifies the affected skin area precisely. A U-Net generates \
        masks that highlight lesion boundaries, which drive the affected-area estimate and the \
        stage-based treatment suggestions.",
    image: "/images/resunet.png",
};

pub const TECHNOLOGIES: &[(&str, &[&str])] = &[
    ("Frontend", &["Rust", "Yew", "WebAssembly"]),
    ("Backend", &["FastAPI", "Python", "actix-web"]),
    ("Others", &["TensorFlow", "PyTorch", "Git", "Kaggle", "MakeSense.AI"]),
];
