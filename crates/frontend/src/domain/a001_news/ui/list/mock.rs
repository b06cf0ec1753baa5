use chrono::NaiveDate;
use contracts::domain::a001_news::{Category, NewsId, NewsListItem, PublishStatus};

type SeedRow = (i64, &'static str, Category, (i32, u32, u32), u64, u32, PublishStatus);

const SEED: [SeedRow; 12] = [
    (1, "Workshop Pengembangan Diri untuk Santri", Category::Education, (2025, 2, 20), 11, 2, PublishStatus::Published),
    (2, "Kegiatan Bakti Sosial di Lingkungan Sekitar", Category::Activity, (2025, 2, 20), 33, 2, PublishStatus::Published),
    (3, "Pengumuman Penerimaan Santri Baru 2025", Category::Announcement, (2025, 2, 20), 6, 2, PublishStatus::Published),
    (4, "Artikel Inspiratif: Menggapai Ilmu dengan Iman", Category::Article, (2025, 2, 20), 5, 2, PublishStatus::Draft),
    (5, "Seminar Kesehatan Rohani dan Jasmani", Category::Activity, (2025, 2, 20), 14, 2, PublishStatus::Published),
    (6, "Pelatihan Intensif Tahfidz Al-Qur'an", Category::Education, (2025, 2, 20), 3, 2, PublishStatus::Published),
    (7, "Peringatan HUT RTQ Alhikmah ke-10", Category::Announcement, (2025, 2, 20), 8, 2, PublishStatus::Published),
    (8, "Kajian Rutin Tafsir Quran Setiap Minggu", Category::Activity, (2025, 2, 18), 22, 3, PublishStatus::Published),
    (9, "Program Beasiswa Santri Berprestasi 2025", Category::Announcement, (2025, 2, 15), 47, 4, PublishStatus::Published),
    (10, "Tips Menghafal Al-Quran dengan Metode Efektif", Category::Article, (2025, 2, 10), 89, 5, PublishStatus::Published),
    (11, "Peresmian Gedung Asrama Baru", Category::Activity, (2025, 2, 8), 31, 2, PublishStatus::Draft),
    (12, "Pendaftaran Kelas Bahasa Arab Intermediate", Category::Education, (2025, 2, 5), 18, 3, PublishStatus::Published),
];

/// Articles shown until the host wires a real backend.
pub fn seed_news() -> Vec<NewsListItem> {
    SEED.iter()
        .filter_map(|&(id, title, category, (y, m, d), views, read_time, status)| {
            Some(NewsListItem {
                id: NewsId(id),
                title: title.to_string(),
                category,
                created_at: NaiveDate::from_ymd_opt(y, m, d)?,
                views,
                read_time,
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_news::NewsStats;

    #[test]
    fn seeds_twelve_articles_with_two_drafts() {
        let items = seed_news();
        assert_eq!(items.len(), 12);

        let drafts: Vec<i64> = items
            .iter()
            .filter(|i| i.status == PublishStatus::Draft)
            .map(|i| i.id.value())
            .collect();
        assert_eq!(drafts, vec![4, 11]);
    }

    #[test]
    fn seed_stats_match_the_cards() {
        let stats = NewsStats::from_items(&seed_news());
        assert_eq!(stats.total_views, 287);
        assert_eq!(stats.published, 10);
        assert_eq!(stats.average_views, 24);
    }
}
