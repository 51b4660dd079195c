use bookmark_engine::{extract_preview, Platform};
use pretty_assertions::assert_eq;

const ZENN_URL: &str = "https://zenn.dev/someone/articles/rust-intro";
const ZENN_HTML: &str = r#"<html><head>
    <title>Rust入門 | Zenn</title>
    <meta property="og:title" content="Rust入門">
    <meta property="og:description" content="所有権から始めるRust">
    <meta property="og:image" content="https://res.cloudinary.com/zenn/image/upload/og.png">
    <meta property="og:site_name" content="Zenn Generic">
    <meta property="article:published_time" content="2024-03-01T09:00:00+09:00">
</head><body>
    <a class="ArticleSidebar_userName__x1" href="/someone"> Someone </a>
    <div>
        <a class="TopicList_topic__a" href="/topics/rust">Rust</a>
        <a class="TopicList_topic__a" href="/topics/beginner"> 初心者 </a>
        <a href="/topics/rust">Rust</a>
    </div>
</body></html>"#;

#[test]
fn zenn_fields_take_precedence_over_generic_meta() {
    let result = extract_preview(ZENN_HTML, ZENN_URL).unwrap();
    assert_eq!(result.title, "Rust入門");
    assert_eq!(result.description, "所有権から始めるRust");
    assert_eq!(result.site_name, "Zenn");
    assert_eq!(result.author.as_deref(), Some("Someone"));
    assert_eq!(result.published_at.as_deref(), Some("2024-03-01T09:00:00+09:00"));
    assert_eq!(
        result.tags,
        Some(vec!["Rust".to_string(), "初心者".to_string()])
    );
    assert_eq!(result.image, "https://res.cloudinary.com/zenn/image/upload/og.png");
    assert_eq!(result.canonical_url, ZENN_URL);
}

#[test]
fn qiita_author_falls_back_to_url_owner() {
    let html = r#"<html><head>
        <meta property="og:title" content="Qiita記事">
        <meta name="description" content="説明文">
    </head><body>
        <time itemprop="datePublished" datetime="2023-12-24T10:00:00Z">2023/12/24</time>
        <a href="/tags/rust">Rust</a><a href="/tags/axum">axum</a><a href="/tags/rust">Rust</a>
    </body></html>"#;
    let result = extract_preview(html, "https://qiita.com/alice/items/0123abcd").unwrap();
    assert_eq!(result.title, "Qiita記事");
    assert_eq!(result.description, "説明文");
    assert_eq!(result.author.as_deref(), Some("@alice"));
    assert_eq!(result.published_at.as_deref(), Some("2023-12-24T10:00:00Z"));
    assert_eq!(result.tags, Some(vec!["Rust".to_string(), "axum".to_string()]));
    assert_eq!(result.site_name, "Qiita");
}

#[test]
fn note_hashtags_lose_their_marker() {
    let html = r#"<html><body>
        <h1 class="o-noteContentHeader__title"> ノートの題名 </h1>
        <div class="o-noteContentHeader__name"><a href="/bob">ボブ</a></div>
        <a href="/hashtag/日記">#日記</a>
        <a href="/hashtag/エッセイ">#エッセイ</a>
        <a href="/hashtag/日記">#日記</a>
    </body></html>"#;
    let result = extract_preview(html, "https://note.com/bob/n/n123").unwrap();
    assert_eq!(result.title, "ノートの題名");
    assert_eq!(result.description, "");
    assert_eq!(result.author.as_deref(), Some("ボブ"));
    assert_eq!(
        result.tags,
        Some(vec!["日記".to_string(), "エッセイ".to_string()])
    );
}

#[test]
fn medium_prefers_platform_site_name_fallback() {
    let html = r#"<html><head>
        <meta name="author" content="Carol">
        <meta property="article:published_time" content="2022-01-05T00:00:00.000Z">
    </head><body><article>
        <h1 data-testid="storyTitle">Async Rust</h1>
        <h2>Futures explained</h2>
        <a href="https://medium.com/tag/rust">Rust</a>
    </article></body></html>"#;
    let result = extract_preview(html, "https://medium.com/@carol/async-rust-1").unwrap();
    assert_eq!(result.title, "Async Rust");
    assert_eq!(result.description, "Futures explained");
    assert_eq!(result.site_name, "Medium");
    assert_eq!(result.author.as_deref(), Some("Carol"));
    assert_eq!(result.tags, Some(vec!["Rust".to_string()]));
}

#[test]
fn hatena_categories_become_tags() {
    let html = r#"<html><body>
        <h1 id="title"><a href="/">Dave's Blog</a></h1>
        <article>
            <h1 class="entry-title"><a href="/entry/1">はてなの記事</a></h1>
            <div class="entry-categories">
                <a class="entry-category-link" href="/archive/category/Rust">Rust</a>
                <a class="entry-category-link" href="/archive/category/Go">Go</a>
            </div>
            <div class="entry-date"><time datetime="2021-07-07">2021-07-07</time></div>
            <div class="entry-content"><p>最初の段落</p><img src="/images/a.png"></div>
        </article>
    </body></html>"#;
    let result = extract_preview(html, "https://dave.hatenablog.com/entry/1").unwrap();
    assert_eq!(result.title, "はてなの記事");
    assert_eq!(result.description, "最初の段落");
    assert_eq!(result.site_name, "Dave's Blog");
    assert_eq!(result.image, "https://dave.hatenablog.com/images/a.png");
    assert_eq!(result.published_at.as_deref(), Some("2021-07-07"));
    assert_eq!(result.tags, Some(vec!["Rust".to_string(), "Go".to_string()]));
}

#[test]
fn github_about_and_topics() {
    let html = r#"<html><head>
        <meta property="og:title" content="GitHub - owner/repo: Short">
        <meta property="og:description" content="Contribute to owner/repo development by creating an account on GitHub.">
        <meta property="og:image" content="https://opengraph.githubassets.com/1/owner/repo">
    </head><body>
        <div class="BorderGrid-cell"><p class="f4 my-3"> A fast thing </p></div>
        <a class="topic-tag topic-tag-link" href="/topics/rust"> rust </a>
        <a class="topic-tag topic-tag-link" href="/topics/cli">cli</a>
    </body></html>"#;
    let result = extract_preview(html, "https://github.com/owner/repo").unwrap();
    assert_eq!(result.description, "A fast thing");
    assert_eq!(result.author.as_deref(), Some("owner"));
    assert_eq!(result.site_name, "GitHub");
    assert_eq!(result.tags, Some(vec!["rust".to_string(), "cli".to_string()]));
    // No image marker in the opengraph URL: dropped by the normalizer.
    assert_eq!(result.image, "");
}

#[test]
fn broken_platform_handler_falls_through_to_generic() {
    // Detected as GitHub by substring, but the owner segment cannot be parsed.
    let html = r#"<title>Fallback title</title><meta name="description" content="generic">"#;
    let result = extract_preview(html, "github.com/owner/repo").unwrap();
    assert_eq!(result.title, "Fallback title");
    assert_eq!(result.description, "generic");
    assert_eq!(result.site_name, "");
    assert_eq!(result.author, None);
}

#[test]
fn every_platform_is_reachable_by_url() {
    let urls = [
        "https://zenn.dev/x",
        "https://qiita.com/x",
        "https://note.com/x",
        "https://medium.com/x",
        "https://x.hatenablog.jp/",
        "https://github.com/x",
    ];
    let detected: Vec<_> = urls.iter().filter_map(|u| Platform::detect(u)).collect();
    assert_eq!(detected, Platform::ALL.to_vec());
}
