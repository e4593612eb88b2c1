//! Static HTML served at /api/docs.

pub const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Micro SaaS Scout API Documentation</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 40px; }
    h1 { color: #333; }
    .endpoint { background: #f5f5f5; padding: 15px; margin: 10px 0; border-radius: 5px; }
    .method { background: #4CAF50; color: white; padding: 5px 10px; border-radius: 3px; }
    .url { font-family: monospace; color: #0066cc; }
  </style>
</head>
<body>
  <h1>API Documentation</h1>
  <p>Simple REST API for the Micro SaaS Scout project.</p>

  <div class="endpoint">
    <span class="method">GET</span> <span class="url">/api/</span>
    <p>API root endpoint</p>
  </div>

  <div class="endpoint">
    <span class="method">GET</span> <span class="url">/api/health</span>
    <p>Health check endpoint</p>
  </div>

  <div class="endpoint">
    <span class="method">GET</span> <span class="url">/api/hello</span>
    <p>Hello test endpoint</p>
  </div>

  <div class="endpoint">
    <span class="method">GET</span> <span class="url">/api/stats</span>
    <p>System statistics</p>
  </div>

  <h2>Testing</h2>
  <pre>
curl http://localhost:3000/api/
curl http://localhost:3000/api/health
curl http://localhost:3000/api/hello
  </pre>
</body>
</html>
"#;
