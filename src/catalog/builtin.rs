use crate::catalog::models::ImageRecord;
use crate::catalog::source::CatalogSource;
use crate::error::Result;

const BUILTIN_IMAGES: [(i64, &str, &str); 12] = [
    (
        1,
        "https://t4.ftcdn.net/jpg/03/21/43/07/360_F_321430761_qQi0CU9tzI5w1k1vJgdA02LMtXtsXvJE.jpg",
        "Hacker image",
    ),
    (
        2,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR8_DtedtVwk8-scOCBoMzzSeSU_xWbF-5BVA&s",
        "Basic Linux Logo",
    ),
    (
        3,
        "https://www.kali.org/wallpapers/images/2020.4/kali-neon.png",
        "Kali Linux Logo",
    ),
    (
        4,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTdUA8OyAYssOA_WnpzFmjdNrsWSrh-klb8pw&s",
        "Arch Linux Logo",
    ),
    (
        5,
        "https://cdn.cyberpunk.rs/wp-content/uploads/2018/08/PARROT.jpg",
        "Parrot Linux Logo",
    ),
    (
        6,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRYfLjyunDFihF41MjFiNiL9PjQN0xKBq-nwA&s",
        "Garuda Linux Logo",
    ),
    (
        7,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTMCKD-jk0CJ8HyV-1zRyNmdUG0dT7fZEAypQ&s",
        "Ubuntu Logo",
    ),
    (
        8,
        "https://e7.pngegg.com/pngimages/388/781/png-clipart-microsoft-logo-windows-xp-microsoft-rectangle-computer.png",
        "Windows Logo",
    ),
    (
        9,
        "https://cdn.worldvectorlogo.com/logos/mac-os-2.svg",
        "Mac Logo",
    ),
    (
        10,
        "https://upload.wikimedia.org/wikipedia/commons/0/04/Debian_logo.png",
        "Debian Distro Logo",
    ),
    (
        11,
        "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3f/Fedora_logo.svg/2048px-Fedora_logo.svg.png",
        "Fedora Linux Logo",
    ),
    (
        12,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSBB1grPRbo4YkB_kphI5HNzHSUjgxykqVJfQ&s",
        "Mint Linux Logo",
    ),
];

/// The bundled OS logo list.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<Vec<ImageRecord>> {
        Ok(BUILTIN_IMAGES
            .iter()
            .map(|(id, url, title)| ImageRecord::new(*id, *url, *title))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_twelve_ordered_entries() {
        let images = BuiltinCatalog.load().expect("builtin catalog");
        assert_eq!(images.len(), 12);
        let ids: Vec<i64> = images.iter().map(|image| image.id.get()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert_eq!(images[2].title, "Kali Linux Logo");
        assert_eq!(images[11].title, "Mint Linux Logo");
    }
}
