//! Built-in script catalog

use std::collections::BTreeMap;

use super::{ParameterValue, ScriptEntry};

struct Builtin {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    author: &'static str,
    version: &'static str,
    script_path: &'static str,
    video_id: &'static str,
    tags: [&'static str; 4],
}

const BUILTINS: [Builtin; 9] = [
    Builtin {
        id: "1",
        name: "Auto UV Unwrap",
        description: "Automatically unwraps UV coordinates for selected objects with smart projection",
        category: "modeling",
        author: "BlenderBot",
        version: "1.2.0",
        script_path: "auto_uv_unwrap.py",
        video_id: "JmCIgJxKg8Y",
        tags: ["uv", "unwrap", "modeling", "automation"],
    },
    Builtin {
        id: "2",
        name: "Batch Render Setup",
        description: "Sets up batch rendering for multiple camera angles with custom naming",
        category: "rendering",
        author: "RenderMaster",
        version: "2.1.0",
        script_path: "batch_render.py",
        video_id: "ZTxBrjN1ugA",
        tags: ["render", "batch", "camera", "automation"],
    },
    Builtin {
        id: "3",
        name: "Procedural Tree Generator",
        description: "Generates realistic trees with customizable parameters using geometry nodes",
        category: "generation",
        author: "NatureGen",
        version: "1.5.2",
        script_path: "tree_generator.py",
        video_id: "DEgzuMmJtu8",
        tags: ["tree", "procedural", "nature", "geometry"],
    },
    Builtin {
        id: "4",
        name: "Material Library Importer",
        description: "Imports and organizes materials from external libraries with preview generation",
        category: "materials",
        author: "MatLib",
        version: "1.0.3",
        script_path: "material_importer.py",
        video_id: "V3wghbZ-Vh4",
        tags: ["materials", "import", "library", "organization"],
    },
    Builtin {
        id: "5",
        name: "Animation Curve Optimizer",
        description: "Optimizes animation curves by removing redundant keyframes and smoothing",
        category: "animation",
        author: "AnimTools",
        version: "1.8.1",
        script_path: "curve_optimizer.py",
        video_id: "yjjLD3h3yRc",
        tags: ["animation", "curves", "optimization", "keyframes"],
    },
    Builtin {
        id: "6",
        name: "Lighting Studio Setup",
        description: "Creates professional studio lighting setups with HDRI and area lights",
        category: "lighting",
        author: "StudioPro",
        version: "2.0.0",
        script_path: "studio_lighting.py",
        video_id: "Ys4793edotw",
        tags: ["lighting", "studio", "hdri", "professional"],
    },
    Builtin {
        id: "7",
        name: "Mesh Cleanup Tool",
        description: "Removes doubles, fixes normals, and optimizes mesh topology automatically",
        category: "modeling",
        author: "CleanMesh",
        version: "1.3.0",
        script_path: "mesh_cleanup.py",
        video_id: "R1isb0x4zYw",
        tags: ["mesh", "cleanup", "optimization", "topology"],
    },
    Builtin {
        id: "8",
        name: "Export Manager",
        description: "Batch exports objects to multiple formats with custom settings per format",
        category: "utility",
        author: "ExportPro",
        version: "1.4.2",
        script_path: "export_manager.py",
        video_id: "XqX5wh4YeRw",
        tags: ["export", "batch", "formats", "utility"],
    },
    Builtin {
        id: "9",
        name: "Image Resizer",
        description: "Resize all images in the Blender scene to a target resolution with options to maintain aspect ratio.",
        category: "utility",
        author: "ImageUtils",
        version: "1.0.0",
        script_path: "image_resizer.py",
        video_id: "PPu0yVY9kxY",
        tags: ["images", "optimization", "utility", "batch"],
    },
];

/// Default parameters for builtin `id`
fn default_parameters(id: &str) -> BTreeMap<String, ParameterValue> {
    let mut params = BTreeMap::new();
    if id == "9" {
        params.insert("target_width".to_string(), ParameterValue::Number(1024.0));
        params.insert("target_height".to_string(), ParameterValue::Number(1024.0));
        params.insert("maintain_aspect_ratio".to_string(), ParameterValue::Bool(true));
    }
    params
}

/// The scripts shipped with the overlay, in display order
pub fn builtin_scripts() -> Vec<ScriptEntry> {
    BUILTINS
        .iter()
        .map(|b| ScriptEntry {
            id: b.id.to_string(),
            name: b.name.to_string(),
            description: b.description.to_string(),
            category: b.category.to_string(),
            author: b.author.to_string(),
            version: b.version.to_string(),
            script_path: b.script_path.to_string(),
            video_id: b.video_id.to_string(),
            tags: b.tags.iter().map(|t| t.to_string()).collect(),
            parameters: default_parameters(b.id),
        })
        .collect()
}
