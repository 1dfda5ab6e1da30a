//! Canned response texts, returned verbatim to the host.
//!
//! Authored in the shop's fixed Indonesian/English mix. Business facts
//! (address, hours, prices, the WhatsApp number, social handles) live only
//! here; rule tables reference these constants by name.

// Per-page welcome messages for the empty "first contact" utterance.

pub const WELCOME_HOME: &str = "Selamat datang di Elite Cuts! Kami menawarkan layanan barbershop premium. Anda bisa melihat layanan kami, memilih barber favorit, atau mencoba AI Style Assistant untuk rekomendasi gaya rambut.";

pub const WELCOME_BARBERS: &str = "Halaman ini menampilkan barber profesional kami. Setiap barber memiliki spesialisasi dan pengalaman berbeda. Klik tombol 'Book' untuk membuat janji dengan barber pilihan Anda.";

pub const WELCOME_AI_ASSISTANT: &str = "AI Style Assistant membantu Anda menemukan gaya rambut yang sempurna! Upload foto Anda untuk analisis personal atau dapatkan rekomendasi cepat gaya trending.";

pub const WELCOME_BOOKING: &str = "Halaman booking ini memudahkan Anda membuat janji. Pilih layanan, barber, tanggal, dan waktu yang Anda inginkan, lalu klik Confirm Booking.";

// Greeting and the out-of-scope fallback.

pub const GREETING_REPLY: &str = "Halo! Selamat datang di Elite Cuts! \u{1F44B} Saya siap membantu Anda. Silakan tanyakan apa saja tentang layanan kami, cara booking, atau informasi lainnya.";

pub const OUT_OF_SCOPE: &str = "Mohon maaf, saya tidak tahu jawaban dari pertanyaan Anda. Untuk informasi lebih lanjut, mohon hubungi customer service di +62 857-7198-3031.";

// Global topic responses, page independent.

pub const LOCATION: &str = "Kami berlokasi di Ruko Ruby Commercial, Jl. Bulevar Selatan Blok TA, RT.003/RW.005, Marga Mulya, Kec. Bekasi Utara, Kota Bks, Jawa Barat 17142. Anda bisa menemukan kami dengan mudah di Google Maps dengan mencari 'Elite Cuts'!";

pub const HOURS: &str = "Kami buka setiap hari:\n\u{2022} Senin - Jumat: 10:00 - 21:00\n\u{2022} Sabtu - Minggu: 09:00 - 20:00\n\nPastikan Anda booking terlebih dahulu untuk mengamankan jadwal Anda.";

pub const CONTACT: &str = "Anda bisa menghubungi kami melalui WhatsApp atau telepon di +62 857-7198-3031. Jangan ragu untuk bertanya ya!";

pub const PAYMENT: &str = "Kami menerima pembayaran tunai, kartu debit/kredit, dan semua dompet digital melalui QRIS. Pilih metode yang paling nyaman untuk Anda!";

pub const CHILDREN: &str = "Ya, kami memiliki kapster yang berpengalaman dan sabar dalam menangani pelanggan anak-anak agar mereka nyaman dan mendapatkan hasil potongan yang rapi.";

pub const WALK_IN: &str = "Kami sangat menyarankan untuk membuat janji temu terlebih dahulu untuk memastikan Anda mendapatkan slot. Namun, kami tetap melayani walk-in jika ada kapster yang tersedia.";

pub const PACKAGE: &str = "Tentu! Kami punya paket 'Elite Experience' yang mencakup potong rambut, cuci, dan pijat kepala dengan harga spesial. Sangat cocok untuk relaksasi!";

pub const SOCIAL: &str = "Tentu! Jangan lupa follow kami di Instagram @elitecuts07, TikTok @elitecuts07, dan subscribe channel YouTube kami di elitecuts07 untuk melihat hasil karya kami dan info promo terbaru!";

// Home page topics.

pub const HOME_SERVICES: &str = "Kami menyediakan berbagai layanan premium:\n\u{2022} Classic Haircut (Rp 150.000)\n\u{2022} Beard Trim (Rp 75.000)\n\u{2022} Royal Shave (Rp 100.000)\n\u{2022} Creambath\n\u{2022} Pewarnaan Rambut (Hair Coloring)\n\u{2022} Paket perawatan lengkap\n\nKlik 'Book Now' untuk reservasi!";

pub const HOME_PRICING: &str = "Harga potong rambut (Gentleman's Cut) kami mulai dari Rp 150.000. Harga sudah termasuk cuci, styling, dan konsultasi dengan kapster profesional kami.";

pub const HOME_BOOKING: &str = "Cara termudah adalah melalui tombol 'Book Appointment' di bagian atas. Anda bisa memilih layanan, kapster favorit, dan jadwal yang Anda inginkan secara online.";

pub const HOME_FALLBACK: &str = "Anda bisa bertanya tentang layanan, harga, cara booking, atau fitur-fitur kami yang lain.";

// Barbers page topics.

pub const BARBERS_CHOOSE: &str = "Kami memiliki tim kapster profesional dan bersertifikat. Setiap barber memiliki spesialisasi berbeda. Marcus Rodriguez ahli di Classic Cuts, James Wilson di Modern Styles, dan David Chen di Beard Specialist. Klik 'Book' untuk memilih favorit Anda!";

pub const BARBERS_RATING: &str = "Semua barber kami memiliki rating tinggi berdasarkan ulasan pelanggan. Anda bisa melihat jumlah review di setiap kartu barber.";

pub const BARBERS_FALLBACK: &str = "Anda bisa bertanya tentang spesialisasi barber, cara memilih, atau rating mereka.";

// AI assistant page topics.

pub const AI_USAGE: &str = "Sangat mudah! Ada 2 cara: 1) Upload foto Anda untuk analisis AI dan rekomendasi personal, atau 2) Klik 'Get Quick Recommendations' untuk melihat gaya rambut trending yang cocok untuk Anda.";

pub const AI_PHOTO: &str = "Klik tombol 'Upload Your Photo' dan pilih foto selfie Anda. AI kami akan menganalisis bentuk wajah dan memberikan rekomendasi gaya rambut yang paling cocok untuk Anda.";

pub const AI_ACCURACY: &str = "AI kami menggunakan teknologi pengenalan wajah untuk menganalisis bentuk wajah Anda dan memberikan rekomendasi berdasarkan database gaya rambut yang sesuai dengan karakteristik wajah Anda.";

pub const AI_FALLBACK: &str = "Anda bisa bertanya cara menggunakan AI, upload foto, atau akurasi rekomendasi.";

// Booking page topics.

pub const BOOKING_STEPS: &str = "Langkah booking: 1) Pilih layanan yang diinginkan, 2) Pilih barber favorit Anda, 3) Tentukan tanggal di kalender, 4) Pilih waktu yang tersedia, 5) Klik 'Confirm Booking'.";

pub const BOOKING_TIME: &str = "Kami buka dari jam 09:00 - 20:00. Pilih tanggal terlebih dahulu, lalu pilih slot waktu yang tersedia. Setiap sesi memiliki durasi sesuai layanan yang dipilih.";

pub const BOOKING_RESCHEDULE: &str = "Untuk mengubah jadwal atau membatalkan, mohon hubungi kami via WhatsApp di +62 857-7198-3031 minimal 3 jam sebelum jadwal Anda agar kami bisa menyesuaikannya.";

pub const BOOKING_FALLBACK: &str = "Anda bisa bertanya tentang langkah booking, jam operasional, atau cara mengubah booking.";
