//! Static page module
//!
//! The landing and error pages are fixed HTML, delivered verbatim. No
//! templating is involved.

/// Landing page served at the site root
#[allow(clippy::too_many_lines)]
pub fn landing_page() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>nowall - Bypass Paywalls Instantly</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: #ffffff;
            color: #111111;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            padding: 4rem 1rem;
            width: 100%;
        }
        h1 {
            font-size: 3em;
            margin-bottom: 1rem;
            font-weight: 700;
        }
        h1 span {
            color: #ff5722;
        }
        .hero {
            font-size: 1.25em;
            max-width: 38rem;
            margin-bottom: 2.5rem;
        }
        .url-form {
            display: flex;
            gap: 0.5rem;
            background: #f7f7f7;
            padding: 1.5rem;
            border-radius: 12px;
            border: 2px solid #111;
            margin-bottom: 3rem;
        }
        .url-form input {
            font-family: monospace;
            font-size: 1rem;
            flex: 1;
            padding: 0.75rem 1rem;
            border: 2px solid #111;
            border-radius: 8px;
        }
        .url-form button {
            background: #ff5722;
            color: white;
            border: 2px solid #111;
            border-radius: 8px;
            padding: 0.75rem 1.5rem;
            font-weight: 700;
            font-size: 1rem;
            cursor: pointer;
        }
        .how-to {
            background: #f7f7f7;
            padding: 2rem;
            border-radius: 12px;
            margin-bottom: 2rem;
        }
        .how-to h2 {
            margin-bottom: 1rem;
        }
        .how-to ol {
            padding-left: 1.5rem;
        }
        .how-to li {
            margin-bottom: 0.75rem;
        }
        .tip {
            padding: 1.5rem;
            background: rgba(255, 87, 34, 0.08);
            border-left: 4px solid #ff5722;
            border-radius: 0 12px 12px 0;
        }
        .tip code {
            display: block;
            font-size: 0.9rem;
            margin-top: 0.75rem;
            word-break: break-all;
        }
        .footer {
            margin-top: auto;
            text-align: center;
            padding: 2rem 0;
            font-size: 0.9rem;
            color: #666;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1><span>nowall</span></h1>
        <p class="hero">A <strong>ridiculously simple</strong> tool that helps you bypass paywalls and read articles without limits.</p>

        <form class="url-form" onsubmit="go(event)">
            <input id="url-input" type="text" placeholder="example.com/article-with-paywall" aria-label="URL to bypass" autofocus>
            <button type="submit">Go</button>
        </form>

        <div class="how-to">
            <h2>How it works</h2>
            <ol>
                <li>Find an article behind a paywall</li>
                <li>Enter the article URL above, or put this site's address in front of it</li>
                <li>We redirect you to an archived version without the paywall</li>
                <li>Enjoy reading without interruptions</li>
            </ol>
        </div>

        <div class="tip">
            <strong>Pro tip:</strong> create a bookmark with the following JavaScript to bypass paywalls with one click:
            <code>javascript:(function(){window.location=location.origin+'/'+window.location.href})()</code>
        </div>
    </div>

    <div class="footer">
        We don't store any data or track your browsing.
    </div>

    <script>
        function go(event) {
            event.preventDefault();
            var url = document.getElementById('url-input').value.trim();
            if (!url) return;
            window.location.href = '/' + url;
        }
    </script>
</body>
</html>"##
}

/// Error page served for invalid redirect targets
pub fn error_page() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>nowall - Invalid URL</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background: #f8f9fa;
            color: #212529;
            margin: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
        }
        .container {
            max-width: 600px;
            width: 90%;
            padding: 3rem;
            background: #ffffff;
            border-radius: 12px;
            box-shadow: 0 8px 30px rgba(0, 0, 0, 0.1);
            text-align: center;
        }
        h1 {
            color: #e63946;
            margin-bottom: 1.5rem;
        }
        .example {
            background: #f8f9fa;
            padding: 1.2rem;
            border-radius: 8px;
            font-family: monospace;
            margin: 1.5rem auto;
            word-break: break-all;
            border-left: 4px solid #3a86ff;
        }
        .button {
            display: inline-block;
            background: #3a86ff;
            color: white;
            text-decoration: none;
            padding: 0.8rem 1.5rem;
            border-radius: 6px;
            font-weight: 500;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Invalid URL</h1>
        <div class="example">
            /example.com/path/to/article
        </div>
        <p>Make sure you're including a valid domain name after the leading slash.</p>
        <a href="/" class="button">Return to Home</a>
    </div>
</body>
</html>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_complete_documents() {
        for page in [landing_page(), error_page()] {
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.ends_with("</html>"));
        }
    }

    #[test]
    fn test_error_page_explains_the_fix() {
        assert!(error_page().contains("Invalid URL"));
        assert!(error_page().contains("/example.com/path/to/article"));
    }
}
