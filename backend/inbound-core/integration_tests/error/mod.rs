mod inbound;
